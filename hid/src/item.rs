//! Report descriptor item model (\[HID\] Section 6.2.2).

use std::fmt::{self, Display, Formatter};

/// Decoded report descriptor item (\[HID\] Section 5.2, 6.2.2).
///
/// Variants are prefixed with `M`, `G`, or `L` for Main, Global, or Local type,
/// respectively. One or more fields of data from controls are defined by a Main
/// item and further described by the preceding Global and Local items. Local
/// items only describe the data fields defined by the next Main item. Global
/// items become the default attributes for all subsequent data fields.
///
/// Reserved short items and all long items are represented by
/// [`Item::Unknown`], so every byte sequence that frames correctly has a
/// decoded form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Item {
    /// Data from one or more similar controls on a device.
    MInput(Flag),

    /// Data to one or more similar controls on a device.
    MOutput(Flag),

    /// Device input and output not intended for consumption by the end user.
    MFeature(Flag),

    /// Start of a meaningful grouping of Input, Output, and Feature items.
    MCollection(CollectionKind),

    /// End of the innermost open collection.
    MEndCollection,

    /// Current Usage Page. Any Usage that follows which defines 16 bits or
    /// fewer is interpreted as a Usage ID and concatenated with the Usage Page
    /// to form a 32-bit usage.
    GUsagePage(u16),

    /// Extent value in logical units.
    GLogicalMin(i32),

    /// Extent value in logical units.
    GLogicalMax(i32),

    /// Minimum value for the physical extent of a variable item.
    GPhysicalMin(i32),

    /// Maximum value for the physical extent of a variable item.
    GPhysicalMax(i32),

    /// Value of the unit exponent, stored as a regular signed integer.
    GUnitExp(i32),

    /// Physical units.
    GUnit(u32),

    /// Size of the report fields in bits.
    GReportSize(u32),

    /// Report ID prefix of subsequent reports.
    GReportId(u8),

    /// Number of fields included in the report for the next Main item.
    GReportCount(u32),

    /// Places a copy of the global item state table on the stack.
    GPush,

    /// Replaces the item state table with the top structure from the stack.
    GPop,

    /// Suggested usage for the next Main item or collection. Values above
    /// `0xFFFF` are extended usages that carry their own page.
    LUsage(u32),

    /// Starting usage associated with an array or bitmap.
    LUsageMin(u32),

    /// Ending usage associated with an array or bitmap.
    LUsageMax(u32),

    /// Designator index in the Physical descriptor.
    LDesignatorIndex(u32),

    /// Index of the starting designator associated with an array or bitmap.
    LDesignatorMin(u32),

    /// Index of the ending designator associated with an array or bitmap.
    LDesignatorMax(u32),

    /// String index in the string descriptor.
    LStringIndex(u32),

    /// First string index of a group of sequential strings.
    LStringMin(u32),

    /// Last string index of a group of sequential strings.
    LStringMax(u32),

    /// Opens (1) or closes (0) a delimited set of usages.
    LDelim(u32),

    /// Reserved short item or long item. For long items, `tag` is
    /// `bLongItemTag`. For short items of the reserved type, `tag` is
    /// `(type << 4) | tag`; for other short items it is the 4-bit tag.
    Unknown { tag: u8, data: Vec<u8> },
}

impl Item {
    /// Returns the item name as it appears in the HID specification.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        use Item::*;
        match *self {
            MInput(_) => "Input",
            MOutput(_) => "Output",
            MFeature(_) => "Feature",
            MCollection(_) => "Collection",
            MEndCollection => "End Collection",
            GUsagePage(_) => "Usage Page",
            GLogicalMin(_) => "Logical Minimum",
            GLogicalMax(_) => "Logical Maximum",
            GPhysicalMin(_) => "Physical Minimum",
            GPhysicalMax(_) => "Physical Maximum",
            GUnitExp(_) => "Unit Exponent",
            GUnit(_) => "Unit",
            GReportSize(_) => "Report Size",
            GReportId(_) => "Report ID",
            GReportCount(_) => "Report Count",
            GPush => "Push",
            GPop => "Pop",
            LUsage(_) => "Usage",
            LUsageMin(_) => "Usage Minimum",
            LUsageMax(_) => "Usage Maximum",
            LDesignatorIndex(_) => "Designator Index",
            LDesignatorMin(_) => "Designator Minimum",
            LDesignatorMax(_) => "Designator Maximum",
            LStringIndex(_) => "String Index",
            LStringMin(_) => "String Minimum",
            LStringMax(_) => "String Maximum",
            LDelim(_) => "Delimiter",
            Unknown { .. } => "Unknown",
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use Item::*;
        let name = self.name();
        match *self {
            MInput(v) | MOutput(v) | MFeature(v) => write!(f, "{name} ({v})"),
            MCollection(k) => write!(f, "{name} ({k})"),
            MEndCollection | GPush | GPop => f.write_str(name),
            GUsagePage(v) => write!(f, "{name} ({v:#06X})"),
            GLogicalMin(v) | GLogicalMax(v) | GPhysicalMin(v) | GPhysicalMax(v) | GUnitExp(v) => {
                write!(f, "{name} ({v})")
            }
            GUnit(v) => write!(f, "{name} ({v:#010X})"),
            GReportId(v) => write!(f, "{name} ({v})"),
            LUsage(v) | LUsageMin(v) | LUsageMax(v) if v > 0xFFFF => {
                write!(f, "{name} ({v:#010X})")
            }
            LUsage(v) | LUsageMin(v) | LUsageMax(v) => write!(f, "{name} ({v:#06X})"),
            GReportSize(v)
            | GReportCount(v)
            | LDesignatorIndex(v)
            | LDesignatorMin(v)
            | LDesignatorMax(v)
            | LStringIndex(v)
            | LStringMin(v)
            | LStringMax(v)
            | LDelim(v) => write!(f, "{name} ({v})"),
            Unknown { tag, ref data } => write!(f, "{name} (tag={tag:#04X}, data={data:02X?})"),
        }
    }
}

bitflags::bitflags! {
    /// Input, Output, and Feature item data flags (\[HID\] Section 6.2.2.5).
    /// Undefined bits are retained, so [`Flag::bits`] always returns the raw
    /// item payload.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct Flag: u32 {
        /// Data / constant.
        const CONST = 1 << 0;
        /// Array / variable.
        const VAR = 1 << 1;
        /// Absolute / relative.
        const REL = 1 << 2;
        /// No wrap / wrap.
        const WRAP = 1 << 3;
        /// Linear / non-linear.
        const NON_LINEAR = 1 << 4;
        /// Preferred state / no preferred.
        const NO_PREF = 1 << 5;
        /// No null position / null state.
        const NULL = 1 << 6;
        /// Non-volatile / volatile. Reserved for Input items.
        const VOLATILE = 1 << 7;
        /// Bit field / buffered bytes.
        const BYTES = 1 << 8;
    }
}

impl Display for Flag {
    /// Formats the flags in HID Descriptor Tool style, e.g. `Data,Var,Abs`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pick = |flag, set: &'static str, clear: &'static str| {
            if self.contains(flag) {
                set
            } else {
                clear
            }
        };
        write!(
            f,
            "{},{},{}",
            pick(Self::CONST, "Const", "Data"),
            pick(Self::VAR, "Var", "Array"),
            pick(Self::REL, "Rel", "Abs"),
        )?;
        for (flag, name) in [
            (Self::WRAP, "Wrap"),
            (Self::NON_LINEAR, "NonLinear"),
            (Self::NO_PREF, "NoPref"),
            (Self::NULL, "Null"),
            (Self::VOLATILE, "Vol"),
            (Self::BYTES, "Buf"),
        ] {
            if self.contains(flag) {
                write!(f, ",{name}")?;
            }
        }
        Ok(())
    }
}

/// Collection type (\[HID\] Section 6.2.2.6).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, num_enum::TryFromPrimitive)]
#[cfg_attr(test, derive(enum_iterator::Sequence))]
#[repr(u8)]
pub enum CollectionKind {
    /// A set of data items that represent data points collected at one
    /// geometric point.
    Physical = 0x00,

    /// A group of Main items that might be familiar to applications, such as a
    /// keyboard or mouse.
    Application = 0x01,

    /// A set of data items that form a composite data structure.
    Logical = 0x02,

    /// A logical collection that wraps all the fields in a report.
    Report = 0x03,

    /// A logical collection that contains an array of selector usages.
    NamedArray = 0x04,

    /// A logical collection that modifies the meaning of the usages that it
    /// contains.
    UsageSwitch = 0x05,

    /// Modifies the meaning of the usage attached to the encompassing
    /// collection.
    UsageModifier = 0x06,
}

impl CollectionKind {
    /// Returns the collection type for the low byte of a Collection item
    /// payload. Values outside the range defined by the HID specification
    /// (including vendor-defined 0x80-0xFF) fall back to
    /// [`CollectionKind::Physical`], which masks malformed input.
    #[must_use]
    pub fn from_raw(v: u8) -> Self {
        use num_enum::TryFromPrimitive;
        Self::try_from_primitive(v).unwrap_or_else(|_| {
            tracing::warn!("Unknown collection type {v:#04X}, treating as Physical");
            Self::Physical
        })
    }

    /// Returns the display name of the collection type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Application => "Application",
            Self::Logical => "Logical",
            Self::Report => "Report",
            Self::NamedArray => "Named Array",
            Self::UsageSwitch => "Usage Switch",
            Self::UsageModifier => "Usage Modifier",
        }
    }
}

impl Display for CollectionKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_kind() {
        for k in enum_iterator::all::<CollectionKind>() {
            assert_eq!(CollectionKind::from_raw(k as u8), k);
        }
        assert_eq!(enum_iterator::cardinality::<CollectionKind>(), 7);
        assert_eq!(CollectionKind::from_raw(0x06), CollectionKind::UsageModifier);
        assert_eq!(CollectionKind::NamedArray.to_string(), "Named Array");
    }

    #[test]
    fn collection_kind_out_of_range_is_physical() {
        assert_eq!(CollectionKind::from_raw(0x07), CollectionKind::Physical);
        assert_eq!(CollectionKind::from_raw(0x80), CollectionKind::Physical);
        assert_eq!(CollectionKind::from_raw(0xFF), CollectionKind::Physical);
    }

    #[test]
    fn flag_display() {
        assert_eq!(Flag::empty().to_string(), "Data,Array,Abs");
        assert_eq!(Flag::VAR.to_string(), "Data,Var,Abs");
        assert_eq!((Flag::VAR | Flag::REL).to_string(), "Data,Var,Rel");
        assert_eq!(Flag::CONST.to_string(), "Const,Array,Abs");
        assert_eq!(
            (Flag::VAR | Flag::NULL | Flag::BYTES).to_string(),
            "Data,Var,Abs,Null,Buf"
        );
    }

    #[test]
    fn flag_retains_undefined_bits() {
        let f = Flag::from_bits_retain(0x0001_0203);
        assert_eq!(f.bits(), 0x0001_0203);
        assert!(f.contains(Flag::CONST | Flag::VAR));
    }

    #[test]
    fn item_display() {
        assert_eq!(Item::MInput(Flag::VAR).to_string(), "Input (Data,Var,Abs)");
        assert_eq!(
            Item::MCollection(CollectionKind::Application).to_string(),
            "Collection (Application)"
        );
        assert_eq!(Item::MEndCollection.to_string(), "End Collection");
        assert_eq!(Item::GUsagePage(1).to_string(), "Usage Page (0x0001)");
        assert_eq!(Item::GLogicalMin(-127).to_string(), "Logical Minimum (-127)");
        assert_eq!(Item::LUsage(0x30).to_string(), "Usage (0x0030)");
        assert_eq!(Item::LUsage(0x000C_00E9).to_string(), "Usage (0x000C00E9)");
        assert_eq!(
            Item::Unknown {
                tag: 0x10,
                data: vec![0xAB, 0xCD]
            }
            .to_string(),
            "Unknown (tag=0x10, data=[AB, CD])"
        );
    }
}

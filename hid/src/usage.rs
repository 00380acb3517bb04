//! Usage page and usage name lookup (\[HUT\] Section 3).

use std::fmt::{self, Display, Formatter};

use crate::usage_tables;

/// Usage page IDs (\[HUT\] Section 3).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, num_enum::TryFromPrimitive)]
#[cfg_attr(test, derive(enum_iterator::Sequence))]
#[non_exhaustive]
#[repr(u16)]
pub enum Page {
    Undefined = 0x00,
    /// Generic Desktop Page.
    GenericDesktop = 0x01,
    /// Simulation Controls Page.
    Sim = 0x02,
    /// VR Controls Page.
    Vr = 0x03,
    /// Sport Controls Page.
    Sport = 0x04,
    /// Game Controls Page.
    Game = 0x05,
    /// Generic Device Controls Page.
    GenericDevice = 0x06,
    /// Keyboard/Keypad Page.
    Key = 0x07,
    /// LED Page.
    Led = 0x08,
    /// Button Page.
    Button = 0x09,
    /// Ordinal Page.
    Ordinal = 0x0A,
    /// Telephony Device Page.
    Telephony = 0x0B,
    /// Consumer Page.
    Consumer = 0x0C,
    /// Digitizers Page.
    Digitizer = 0x0D,
    /// Haptics Page.
    Haptics = 0x0E,
    /// Physical Input Device Page.
    Physical = 0x0F,
    /// Unicode Page.
    Unicode = 0x10,
    /// SoC Page.
    SoC = 0x11,
    /// Eye and Head Trackers Page.
    EyeAndHead = 0x12,
    /// Auxiliary Display Page.
    AuxDisplay = 0x14,
    /// Sensors Page.
    Sensor = 0x20,
    /// Medical Instrument Page.
    Medical = 0x40,
    /// Braille Display Page.
    Braille = 0x41,
    /// Lighting And Illumination Page.
    Lighting = 0x59,
    /// Monitor Page.
    Monitor = 0x80,
    /// Monitor Enumerated Page.
    MonitorEnum = 0x81,
    /// VESA Virtual Controls Page.
    Vesa = 0x82,
    /// Power Page.
    Power = 0x84,
    /// Battery System Page.
    Battery = 0x85,
    /// Barcode Scanner Page.
    Barcode = 0x8C,
    /// Scales Page.
    Scale = 0x8D,
    /// Magnetic Stripe Reader Page.
    MagStripe = 0x8E,
    /// Camera Control Page.
    Camera = 0x90,
    /// Arcade Page.
    Arcade = 0x91,
    /// Gaming Device Page.
    GamingDevice = 0x92,
    /// FIDO Alliance Page.
    Fido = 0xF1D0,
}

impl Page {
    /// Returns the registered page name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use Page::*;
        match self {
            Undefined => "Undefined",
            GenericDesktop => "Generic Desktop Page",
            Sim => "Simulation Controls",
            Vr => "VR Controls",
            Sport => "Sport Controls",
            Game => "Game Controls",
            GenericDevice => "Generic Device Controls",
            Key => "Keyboard/Keypad",
            Led => "LED",
            Button => "Button",
            Ordinal => "Ordinal",
            Telephony => "Telephony Device",
            Consumer => "Consumer",
            Digitizer => "Digitizers",
            Haptics => "Haptics",
            Physical => "Physical Input Device",
            Unicode => "Unicode",
            SoC => "SoC",
            EyeAndHead => "Eye and Head Trackers",
            AuxDisplay => "Auxiliary Display",
            Sensor => "Sensors",
            Medical => "Medical Instrument",
            Braille => "Braille Display",
            Lighting => "Lighting And Illumination",
            Monitor => "Monitor",
            MonitorEnum => "Monitor Enumerated",
            Vesa => "VESA Virtual Controls",
            Power => "Power",
            Battery => "Battery System",
            Barcode => "Barcode Scanner",
            Scale => "Scales",
            MagStripe => "Magnetic Stripe Reader",
            Camera => "Camera Control",
            Arcade => "Arcade",
            GamingDevice => "Gaming Device",
            Fido => "FIDO Alliance",
        }
    }
}

impl Display for Page {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the name of a usage page or its `0xNNNN` hex form if the page is
/// not registered.
#[must_use]
pub fn page_name(page: u16) -> String {
    Page::try_from(page).map_or_else(|_| format!("0x{page:04X}"), |p| p.name().to_owned())
}

/// Returns the name of a usage within a page or its `0xNNNN` hex form if the
/// usage is not registered. Button, Ordinal, and Monitor Enumerated usages
/// are numbered rather than named.
#[must_use]
pub fn usage_name(page: u16, usage: u16) -> String {
    match (Page::try_from(page), usage) {
        (Ok(Page::Button), 0) => "No Button Pressed".to_owned(),
        (Ok(Page::Button), n) => format!("Button {n}"),
        (Ok(Page::Ordinal | Page::MonitorEnum), 0) => "Undefined".to_owned(),
        (Ok(Page::Ordinal), n) => format!("Instance {n}"),
        (Ok(Page::MonitorEnum), n) => format!("Enum {n}"),
        _ => usage_tables::lookup(page, usage)
            .map_or_else(|| format!("0x{usage:04X}"), str::to_owned),
    }
}

/// Usage page and ID pair (\[HID\] Section 6.2.2.8).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Usage {
    pub page: u16,
    pub id: u16,
}

impl Usage {
    /// Creates a usage from its page and ID.
    #[inline(always)]
    #[must_use]
    pub const fn new(page: u16, id: u16) -> Self {
        Self { page, id }
    }

    /// Resolves a raw Usage item value against the current Usage Page. A value
    /// wider than 16 bits is an extended usage that carries its own page in
    /// the high 16 bits.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    #[must_use]
    pub const fn resolve(page: u16, raw: u32) -> Self {
        let page = if raw > 0xFFFF { (raw >> 16) as u16 } else { page };
        Self::new(page, raw as u16)
    }

    /// Returns the name of the usage page.
    #[inline]
    #[must_use]
    pub fn page_name(self) -> String {
        page_name(self.page)
    }

    /// Returns the name of the usage.
    #[inline]
    #[must_use]
    pub fn name(self) -> String {
        usage_name(self.page, self.id)
    }
}

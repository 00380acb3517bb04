//! HID report descriptor decoder (\[HID\] Section 5.2, 6.2.2).

use std::iter::FusedIterator;

use tracing::trace;

use crate::item::{CollectionKind, Flag, Item};
use crate::{ParseError, Result};

/// Long item prefix (\[HID\] Section 6.2.2.3).
const LONG_ITEM: u8 = 0xFE;

/// A decoded HID report descriptor. This is the only output of a successful
/// [`ReportDescriptor::parse`] call and is not modified afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReportDescriptor {
    raw: Vec<u8>,
    items: Vec<Item>,
    collections: Vec<CollectionNode>,
}

impl ReportDescriptor {
    /// Decodes a raw report descriptor into a flat item list and a collection
    /// tree. An empty buffer is a valid, empty descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error naming the byte offset of the first item that cannot
    /// be framed. No partial result is returned.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let items = Iter::new(raw)
            .map(|r| r.map(|v| v.decode()))
            .collect::<Result<Vec<_>>>()?;
        let collections = TreeBuilder::build(&items);
        trace!(
            "Parsed {} bytes: {} items, {} top-level collections",
            raw.len(),
            items.len(),
            collections.len()
        );
        Ok(Self {
            raw: raw.to_vec(),
            items,
            collections,
        })
    }

    /// Returns the raw descriptor bytes.
    #[inline(always)]
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Returns all items in descriptor order.
    #[inline(always)]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the top-level collections.
    #[inline(always)]
    #[must_use]
    pub fn collections(&self) -> &[CollectionNode] {
        &self.collections
    }

    /// Returns whether the device prefixes its reports with a Report ID.
    #[must_use]
    pub fn uses_report_ids(&self) -> bool {
        (self.items.iter()).any(|v| matches!(*v, Item::GReportId(_)))
    }
}

impl AsRef<[u8]> for ReportDescriptor {
    #[inline(always)]
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

/// A collection and everything declared while it was open.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionNode {
    /// Usage page in effect when the collection was opened.
    pub usage_page: u16,
    /// Usage declared for the collection, or 0 if none.
    pub usage: u32,
    /// Collection type.
    pub kind: CollectionKind,
    /// Nested collections in descriptor order.
    pub children: Vec<CollectionNode>,
    /// Items other than Collection, End Collection, Usage Page, and Usage that
    /// appeared directly inside this collection.
    pub items: Vec<Item>,
}

impl CollectionNode {
    /// Creates an empty collection node.
    #[inline]
    #[must_use]
    pub const fn new(usage_page: u16, usage: u32, kind: CollectionKind) -> Self {
        Self {
            usage_page,
            usage,
            kind,
            children: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Returns the maximum collection nesting depth, counting this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Item type (\[HID\] Section 6.2.2.2).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemType {
    Main,
    Global,
    Local,
    Reserved,
}

impl ItemType {
    #[inline]
    const fn from_prefix(p: u8) -> Self {
        match (p >> 2) & 3 {
            0 => Self::Main,
            1 => Self::Global,
            2 => Self::Local,
            _ => Self::Reserved,
        }
    }
}

/// A framed, undecoded report descriptor item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RawItem<'a> {
    /// Short item with its 4-bit tag and 0, 1, 2, or 4 data bytes.
    Short {
        typ: ItemType,
        tag: u8,
        data: &'a [u8],
    },
    /// Long item with its `bLongItemTag` and `bDataSize` data bytes.
    Long { tag: u8, data: &'a [u8] },
}

impl RawItem<'_> {
    /// Returns the number of descriptor bytes occupied by the item.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        match *self {
            Self::Short { data, .. } => 1 + data.len(),
            Self::Long { data, .. } => 3 + data.len(),
        }
    }

    /// Returns whether the item has no data bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match *self {
            Self::Short { data, .. } | Self::Long { data, .. } => data.is_empty(),
        }
    }

    /// Decodes the item. Reserved tags decode to [`Item::Unknown`].
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn decode(&self) -> Item {
        use Item::*;
        let (typ, tag, data) = match *self {
            Self::Short { typ, tag, data } => (typ, tag, data),
            Self::Long { tag, data } => {
                return Unknown {
                    tag,
                    data: data.to_vec(),
                }
            }
        };
        let u = unsigned(data);
        let s = || signed(data);
        match (typ, tag) {
            (ItemType::Main, 0x08) => MInput(Flag::from_bits_retain(u)),
            (ItemType::Main, 0x09) => MOutput(Flag::from_bits_retain(u)),
            (ItemType::Main, 0x0B) => MFeature(Flag::from_bits_retain(u)),
            (ItemType::Main, 0x0A) => MCollection(CollectionKind::from_raw(u as u8)),
            (ItemType::Main, 0x0C) => MEndCollection,

            (ItemType::Global, 0x00) => GUsagePage(u as u16),
            (ItemType::Global, 0x01) => GLogicalMin(s()),
            (ItemType::Global, 0x02) => GLogicalMax(s()),
            (ItemType::Global, 0x03) => GPhysicalMin(s()),
            (ItemType::Global, 0x04) => GPhysicalMax(s()),
            (ItemType::Global, 0x05) => GUnitExp(s()),
            (ItemType::Global, 0x06) => GUnit(u),
            (ItemType::Global, 0x07) => GReportSize(u),
            (ItemType::Global, 0x08) => GReportId(u as u8),
            (ItemType::Global, 0x09) => GReportCount(u),
            (ItemType::Global, 0x0A) => GPush,
            (ItemType::Global, 0x0B) => GPop,

            (ItemType::Local, 0x00) => LUsage(u),
            (ItemType::Local, 0x01) => LUsageMin(u),
            (ItemType::Local, 0x02) => LUsageMax(u),
            (ItemType::Local, 0x03) => LDesignatorIndex(u),
            (ItemType::Local, 0x04) => LDesignatorMin(u),
            (ItemType::Local, 0x05) => LDesignatorMax(u),
            (ItemType::Local, 0x07) => LStringIndex(u),
            (ItemType::Local, 0x08) => LStringMin(u),
            (ItemType::Local, 0x09) => LStringMax(u),
            (ItemType::Local, 0x0A) => LDelim(u),

            (ItemType::Reserved, tag) => Unknown {
                tag: 3 << 4 | tag,
                data: data.to_vec(),
            },
            (_, tag) => Unknown {
                tag,
                data: data.to_vec(),
            },
        }
    }
}

/// Returns the little-endian unsigned value of a 0-4 byte item payload.
#[inline]
#[must_use]
pub fn unsigned(data: &[u8]) -> u32 {
    (data.iter().rev()).fold(0, |v, &b| v << 8 | u32::from(b))
}

/// Returns the signed value of a 0-4 byte item payload, sign-extended from
/// the payload width.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[inline]
#[must_use]
pub fn signed(data: &[u8]) -> i32 {
    let u = unsigned(data);
    match data.len() {
        0 => 0,
        1 => i32::from(u as u8 as i8),
        2 => i32::from(u as u16 as i16),
        _ => u as i32,
    }
}

/// Report descriptor item framing iterator. Yields each framed item, or a
/// single error if the remaining bytes cannot be framed.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    b: &'a [u8],
    off: usize,
}

impl<'a> Iter<'a> {
    /// Creates an iterator over the items of a raw report descriptor.
    #[inline]
    #[must_use]
    pub const fn new(b: &'a [u8]) -> Self {
        Self { b, off: 0 }
    }

    /// Returns the byte offset of the next item.
    #[inline(always)]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.off
    }

    fn frame(&self, p: u8, tail: &'a [u8]) -> Result<RawItem<'a>> {
        let off = self.off;
        if p == LONG_ITEM {
            let [sz, tag, ref tail @ ..] = *tail else {
                return Err(ParseError::TruncatedLongItemHeader { offset: off });
            };
            let sz = usize::from(sz);
            let data = tail.get(..sz).ok_or(ParseError::TruncatedLongItemPayload {
                offset: off,
                expected_size: sz,
            })?;
            return Ok(RawItem::Long { tag, data });
        }
        let n = [0, 1, 2, 4][usize::from(p & 3)];
        let data = tail.get(..n).ok_or(ParseError::TruncatedShortItem {
            offset: off,
            expected_size: n,
        })?;
        Ok(RawItem::Short {
            typ: ItemType::from_prefix(p),
            tag: p >> 4,
            data,
        })
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Result<RawItem<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&p, tail) = self.b.get(self.off..)?.split_first()?;
        let r = self.frame(p, tail);
        match r {
            Ok(ref v) => self.off += v.len(),
            Err(_) => self.off = self.b.len(),
        }
        Some(r)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.b.len() - self.off;
        (usize::from(rem > 0), Some(rem))
    }
}

impl FusedIterator for Iter<'_> {}

/// Collection tree construction state. Usage page and usage are tracked per
/// build; Push and Pop do not save or restore them.
#[derive(Debug, Default)]
struct TreeBuilder {
    roots: Vec<CollectionNode>,
    open: Vec<CollectionNode>,
    usage_page: u16,
    usage: u32,
}

impl TreeBuilder {
    fn build(items: &[Item]) -> Vec<CollectionNode> {
        let mut b = Self::default();
        for v in items {
            b.push(v);
        }
        b.finish()
    }

    fn push(&mut self, v: &Item) {
        match *v {
            Item::GUsagePage(p) => self.usage_page = p,
            Item::LUsage(u) => self.usage = u,
            Item::MCollection(kind) => {
                (self.open).push(CollectionNode::new(self.usage_page, self.usage, kind));
                self.usage = 0;
            }
            Item::MEndCollection => {
                if let Some(node) = self.open.pop() {
                    self.attach(node);
                } else {
                    trace!("Ignoring End Collection without an open collection");
                }
            }
            _ => {
                if let Some(top) = self.open.last_mut() {
                    top.items.push(v.clone());
                }
            }
        }
    }

    /// Closes all collections left open at the end of the descriptor.
    fn finish(mut self) -> Vec<CollectionNode> {
        if !self.open.is_empty() {
            tracing::warn!("Closing {} unbalanced collection(s)", self.open.len());
        }
        while let Some(node) = self.open.pop() {
            self.attach(node);
        }
        self.roots
    }

    fn attach(&mut self, node: CollectionNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }
}

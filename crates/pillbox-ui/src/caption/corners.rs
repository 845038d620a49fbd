use std::fmt;
use std::str::FromStr;

use pillbox_engine::coords::CornerRadii;

// ── TextAlign ─────────────────────────────────────────────────────────────

/// Horizontal alignment of a caption block.
///
/// Callers pass `Option<TextAlign>`: `None` keeps the default rounding but
/// never emits accents, which is distinct from an explicit `Center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            other => Err(format!("unknown alignment {other:?} (expected left, center or right)")),
        }
    }
}

// ── CornerSet ─────────────────────────────────────────────────────────────

/// Which corners of a line's pill are rounded. Each flag is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerSet {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl CornerSet {
    pub const fn all() -> Self {
        Self { top_left: true, top_right: true, bottom_right: true, bottom_left: true }
    }

    pub const fn none() -> Self {
        Self { top_left: false, top_right: false, bottom_right: false, bottom_left: false }
    }

    /// Per-corner radii: `radius` where rounded, `0` where square.
    pub fn radii(self, radius: f32) -> CornerRadii {
        let r = |rounded: bool| if rounded { radius } else { 0.0 };
        CornerRadii::new(r(self.top_left), r(self.top_right), r(self.bottom_right), r(self.bottom_left))
    }
}

// ── Accent ────────────────────────────────────────────────────────────────

/// Horizontal side of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A concave fillet drawn just outside a square corner of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
    /// Replaces `TopLeft` + `BottomLeft` with one full-height accent.
    LeftMerged,
    /// Replaces `TopRight` + `BottomRight` with one full-height accent.
    RightMerged,
}

impl Accent {
    pub fn side(self) -> Side {
        match self {
            Accent::TopLeft | Accent::BottomLeft | Accent::LeftMerged => Side::Left,
            Accent::TopRight | Accent::BottomRight | Accent::RightMerged => Side::Right,
        }
    }

    /// Stable marker name, usable as a style class.
    pub fn class_name(self) -> &'static str {
        match self {
            Accent::TopLeft => "corner-tl",
            Accent::BottomLeft => "corner-bl",
            Accent::TopRight => "corner-tr",
            Accent::BottomRight => "corner-br",
            Accent::LeftMerged => "corner-left",
            Accent::RightMerged => "corner-right",
        }
    }
}

/// Accents for one line, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccentSet(Vec<Accent>);

impl AccentSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, accent: Accent) {
        self.0.push(accent);
    }

    pub fn contains(&self, accent: Accent) -> bool {
        self.0.contains(&accent)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Accent> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Accent] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AccentSet {
    type Item = Accent;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Accent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

// ── LineRounding ──────────────────────────────────────────────────────────

/// The complete corner decision for one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineRounding {
    pub corners: CornerSet,
    pub accents: AccentSet,
}

// ── decide ────────────────────────────────────────────────────────────────

/// Decides corner rounding and accents for every line of a caption.
///
/// Line length is the number of Unicode scalar values; rendered width plays
/// no part. Returns one entry per line, in order.
pub fn decide<S: AsRef<str>>(lines: &[S], align: Option<TextAlign>) -> Vec<LineRounding> {
    let lengths: Vec<usize> = lines.iter().map(|l| l.as_ref().chars().count()).collect();
    decide_lengths(&lengths, align)
}

/// [`decide`] over precomputed line lengths.
pub fn decide_lengths(lengths: &[usize], align: Option<TextAlign>) -> Vec<LineRounding> {
    let n = lengths.len();
    (0..n)
        .map(|i| {
            let prev = i.checked_sub(1).map(|p| lengths[p]);
            let next = lengths.get(i + 1).copied();
            let rounding = decide_line(lengths[i], prev, next, align);
            log::trace!(
                "line {i}/{n}: len={} corners={:?} accents={:?}",
                lengths[i],
                rounding.corners,
                rounding.accents.as_slice()
            );
            rounding
        })
        .collect()
}

/// One line against its immediate neighbours. `prev`/`next` are `None` at
/// the ends of the block, which also marks the line as first/last.
fn decide_line(len: usize, prev: Option<usize>, next: Option<usize>, align: Option<TextAlign>) -> LineRounding {
    let is_first = prev.is_none();
    let is_last = next.is_none();
    let interior = !is_first && !is_last;

    // A side rounds when it is the outer edge of the block or steps out past
    // a strictly shorter neighbour.
    let top = is_first || prev.is_some_and(|p| len > p);
    let bottom = is_last || next.is_some_and(|n| len > n);

    // Interior lines keep the flush edge square.
    let flush_left = interior && align == Some(TextAlign::Left);
    let flush_right = interior && align == Some(TextAlign::Right);

    let corners = CornerSet {
        top_left: top && !flush_left,
        top_right: top && !flush_right,
        bottom_right: bottom && !flush_right,
        bottom_left: bottom && !flush_left,
    };

    LineRounding { corners, accents: accents_for(corners, align) }
}

/// Square corners on the ragged side(s) need an outside fillet.
fn accents_for(c: CornerSet, align: Option<TextAlign>) -> AccentSet {
    let mut accents = AccentSet::new();
    match align {
        Some(TextAlign::Left) => {
            if !c.bottom_right {
                accents.push(Accent::BottomRight);
            }
            if !c.top_right {
                accents.push(Accent::TopRight);
            }
        }
        Some(TextAlign::Right) => {
            if !c.bottom_left {
                accents.push(Accent::BottomLeft);
            }
            if !c.top_left {
                accents.push(Accent::TopLeft);
            }
        }
        Some(TextAlign::Center) => {
            side_accents(&mut accents, c.top_left, c.bottom_left, [Accent::TopLeft, Accent::BottomLeft, Accent::LeftMerged]);
            side_accents(&mut accents, c.top_right, c.bottom_right, [Accent::TopRight, Accent::BottomRight, Accent::RightMerged]);
        }
        None => {}
    }
    accents
}

fn side_accents(out: &mut AccentSet, top: bool, bottom: bool, [top_accent, bottom_accent, merged]: [Accent; 3]) {
    match (top, bottom) {
        (false, false) => out.push(merged),
        (top, bottom) => {
            if !top {
                out.push(top_accent);
            }
            if !bottom {
                out.push(bottom_accent);
            }
        }
    }
}

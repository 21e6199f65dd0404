//! Gesture tracking: turns pointer drag-and-drop and single-finger touch
//! input into one `CardDroppedOnZone` event.
//!
//! The tracker owns the per-round "which card is in motion" state. Each
//! input modality gets an adapter that translates its raw events into
//! tracker calls, so the scoring side only ever sees [`CardDroppedOnZone`].

use serde::Serialize;
use tracing::debug;

use crate::domain::Zone;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in viewport coordinates. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// True when the two rectangles share a region of positive area.
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Drop-zone rectangles, validated to be non-overlapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneLayout {
    zones: Vec<(Zone, Rect)>,
}

impl ZoneLayout {
    pub fn new(zones: Vec<(Zone, Rect)>) -> Result<Self, DomainError> {
        for (i, (zone_a, rect_a)) in zones.iter().enumerate() {
            for (zone_b, rect_b) in &zones[i + 1..] {
                if zone_a == zone_b {
                    return Err(DomainError::validation(format!(
                        "drop zone {zone_a} listed twice"
                    )));
                }
                if rect_a.overlaps(rect_b) {
                    return Err(DomainError::OverlappingDropZones {
                        first: *zone_a,
                        second: *zone_b,
                    });
                }
            }
        }
        Ok(Self { zones })
    }

    /// Zone whose rectangle contains `p`. A point on a shared edge
    /// resolves to the zone listed first.
    pub fn hit_test(&self, p: Point) -> Option<Zone> {
        self.zones
            .iter()
            .find(|(_, rect)| rect.contains(p))
            .map(|(zone, _)| *zone)
    }

    pub fn rect(&self, zone: Zone) -> Option<Rect> {
        self.zones
            .iter()
            .find(|(z, _)| *z == zone)
            .map(|(_, rect)| *rect)
    }
}

/// The one semantic event both modalities produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardDroppedOnZone {
    pub card_index: usize,
    pub zone: Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Pointer,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Dragging {
        card: usize,
        modality: Modality,
        /// Last known input position; pointer drags leave this to the
        /// platform's native drag image.
        position: Option<Point>,
    },
}

/// What the presentation layer should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Event did not apply to any tracked card.
    Ignored,
    /// `card` is now in motion; `replaced` was in motion before and has
    /// been returned to its resting place.
    Started { card: usize, replaced: Option<usize> },
    /// Drop-zone highlight changed (pointer modality).
    Hover { zone: Option<Zone> },
    /// Card follows the finger; `origin` is its new top-left corner.
    Moved {
        card: usize,
        origin: Point,
        hovered: Option<Zone>,
    },
    Dropped(CardDroppedOnZone),
    /// Released outside every zone; card goes back to where it was.
    Returned { card: usize },
}

/// Per-round drag state machine, shared by every input adapter.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    state: GestureState,
    placed: Vec<bool>,
}

impl GestureTracker {
    pub fn new(card_count: usize) -> Self {
        Self {
            state: GestureState::Idle,
            placed: vec![false; card_count],
        }
    }

    /// Forget all motion and placement for a new round of `card_count` cards.
    pub fn reset(&mut self, card_count: usize) {
        self.state = GestureState::Idle;
        self.placed = vec![false; card_count];
    }

    /// Card currently in motion, and through which modality.
    pub fn in_motion(&self) -> Option<(usize, Modality)> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { card, modality, .. } => Some((card, modality)),
        }
    }

    pub fn position(&self) -> Option<Point> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging { position, .. } => position,
        }
    }

    fn dragging_with(&self, modality: Modality) -> bool {
        matches!(self.in_motion(), Some((_, m)) if m == modality)
    }

    pub fn is_placed(&self, card: usize) -> bool {
        self.placed.get(card).copied().unwrap_or(false)
    }

    /// Idle -> Dragging for an unplaced card. Any card already in motion
    /// is cleared first.
    pub fn begin(&mut self, card: usize, modality: Modality, at: Option<Point>) -> GestureOutcome {
        if card >= self.placed.len() || self.placed[card] {
            debug!(card, ?modality, "drag start ignored for unknown or placed card");
            return GestureOutcome::Ignored;
        }
        let replaced = self.in_motion().map(|(prev, _)| prev);
        self.state = GestureState::Dragging {
            card,
            modality,
            position: at,
        };
        GestureOutcome::Started { card, replaced }
    }

    /// Record a new input position for the card in motion.
    pub fn track(&mut self, at: Point) -> Option<usize> {
        match &mut self.state {
            GestureState::Idle => None,
            GestureState::Dragging { card, position, .. } => {
                *position = Some(at);
                Some(*card)
            }
        }
    }

    /// Record `card` as placed by something other than a drag release.
    /// If it was the card in motion, the drag ends.
    pub fn mark_placed(&mut self, card: usize) {
        let Some(slot) = self.placed.get_mut(card) else {
            return;
        };
        *slot = true;
        if matches!(self.in_motion(), Some((moving, _)) if moving == card) {
            self.state = GestureState::Idle;
        }
    }

    /// Dragging -> Idle. Dropping on a zone places the card for good.
    pub fn release(&mut self, zone: Option<Zone>) -> GestureOutcome {
        let GestureState::Dragging { card, .. } = self.state else {
            return GestureOutcome::Ignored;
        };
        self.state = GestureState::Idle;
        match zone {
            Some(zone) => {
                self.placed[card] = true;
                GestureOutcome::Dropped(CardDroppedOnZone {
                    card_index: card,
                    zone,
                })
            }
            None => GestureOutcome::Returned { card },
        }
    }
}

/// Translates one platform's raw input events into tracker transitions.
pub trait InputAdapter {
    type Event;

    fn handle(&mut self, tracker: &mut GestureTracker, event: Self::Event) -> GestureOutcome;
}

/// Raw pointer drag-and-drop events. Zone events name the zone element
/// the platform delivered them to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    DragStart { card: usize },
    DragOver { zone: Zone },
    DragLeave { zone: Zone },
    Drop { zone: Zone },
    DragEnd,
}

/// Pointer drag-and-drop adapter. Visual tracking is left to the host's
/// native drag image; only the hovered zone is tracked.
#[derive(Debug, Clone, Default)]
pub struct PointerAdapter {
    hovered: Option<Zone>,
}

impl PointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<Zone> {
        self.hovered
    }
}

impl InputAdapter for PointerAdapter {
    type Event = PointerEvent;

    fn handle(&mut self, tracker: &mut GestureTracker, event: PointerEvent) -> GestureOutcome {
        match event {
            PointerEvent::DragStart { card } => {
                self.hovered = None;
                tracker.begin(card, Modality::Pointer, None)
            }
            PointerEvent::DragOver { zone } => {
                if !tracker.dragging_with(Modality::Pointer) || self.hovered == Some(zone) {
                    return GestureOutcome::Ignored;
                }
                self.hovered = Some(zone);
                GestureOutcome::Hover { zone: Some(zone) }
            }
            PointerEvent::DragLeave { zone } => {
                if self.hovered != Some(zone) {
                    return GestureOutcome::Ignored;
                }
                self.hovered = None;
                GestureOutcome::Hover { zone: None }
            }
            PointerEvent::Drop { zone } => {
                self.hovered = None;
                if !tracker.dragging_with(Modality::Pointer) {
                    return GestureOutcome::Ignored;
                }
                tracker.release(Some(zone))
            }
            PointerEvent::DragEnd => {
                self.hovered = None;
                // A successful drop already released the card.
                if !tracker.dragging_with(Modality::Pointer) {
                    return GestureOutcome::Ignored;
                }
                tracker.release(None)
            }
        }
    }
}

/// Raw single-finger touch events, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Start { card: usize, at: Point },
    Move { at: Point },
    End { at: Point },
    Cancel,
}

/// Touch adapter: the card follows the finger and the release point is
/// hit-tested against the drop-zone layout.
#[derive(Debug, Clone)]
pub struct TouchAdapter {
    layout: ZoneLayout,
    card_size: Size,
    hovered: Option<Zone>,
}

impl TouchAdapter {
    pub fn new(layout: ZoneLayout, card_size: Size) -> Self {
        Self {
            layout,
            card_size,
            hovered: None,
        }
    }

    /// Replace the layout after the host re-measured its drop zones.
    pub fn set_layout(&mut self, layout: ZoneLayout) {
        self.layout = layout;
        self.hovered = None;
    }

    pub fn layout(&self) -> &ZoneLayout {
        &self.layout
    }

    pub fn hovered(&self) -> Option<Zone> {
        self.hovered
    }

    /// Drop the highlight left over from an earlier drag.
    pub fn reset_hover(&mut self) {
        self.hovered = None;
    }

    /// Top-left corner that centres the card under the finger.
    fn follow_origin(&self, at: Point) -> Point {
        Point::new(
            at.x - self.card_size.width / 2.0,
            at.y - self.card_size.height / 2.0,
        )
    }
}

impl InputAdapter for TouchAdapter {
    type Event = TouchEvent;

    fn handle(&mut self, tracker: &mut GestureTracker, event: TouchEvent) -> GestureOutcome {
        match event {
            TouchEvent::Start { card, at } => {
                self.hovered = None;
                tracker.begin(card, Modality::Touch, Some(at))
            }
            TouchEvent::Move { at } => {
                if !tracker.dragging_with(Modality::Touch) {
                    return GestureOutcome::Ignored;
                }
                let Some(card) = tracker.track(at) else {
                    return GestureOutcome::Ignored;
                };
                self.hovered = self.layout.hit_test(at);
                GestureOutcome::Moved {
                    card,
                    origin: self.follow_origin(at),
                    hovered: self.hovered,
                }
            }
            TouchEvent::End { at } => {
                self.hovered = None;
                if !tracker.dragging_with(Modality::Touch) {
                    return GestureOutcome::Ignored;
                }
                tracker.release(self.layout.hit_test(at))
            }
            TouchEvent::Cancel => {
                self.hovered = None;
                if !tracker.dragging_with(Modality::Touch) {
                    return GestureOutcome::Ignored;
                }
                tracker.release(None)
            }
        }
    }
}

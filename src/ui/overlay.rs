use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::model::champion::{Champion, ChampionDetail, Ratings};

use super::AsyncData;

/// Owned chart resource for the four power ratings. Exactly one instance may
/// be alive at a time; the controller discards the previous one before a
/// replacement is created and on close.
pub struct StatChart {
    bars: Vec<(&'static str, u64)>,
}

impl StatChart {
    /// Returns `None` when every rating is zero, in which case the chart area
    /// stays hidden.
    pub fn from_ratings(ratings: &Ratings) -> Option<Self> {
        if !ratings.any_nonzero() {
            return None;
        }

        Some(Self {
            bars: vec![
                ("Attack", u64::from(ratings.attack)),
                ("Defense", u64::from(ratings.defense)),
                ("Magic", u64::from(ratings.magic)),
                ("Difficulty", u64::from(ratings.difficulty)),
            ],
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bars: Vec<Bar> = self
            .bars
            .iter()
            .map(|(label, value)| {
                Bar::default()
                    .label((*label).into())
                    .value(*value)
                    .style(Style::default().fg(Color::Rgb(200, 155, 60)))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::TOP).title("Power Ratings"))
            .data(BarGroup::default().bars(&bars))
            .bar_width(10)
            .bar_gap(2)
            .max(10);

        frame.render_widget(chart, area);
    }
}

/// Detail overlay: catalog snapshot for the immediate render plus the lazily
/// fetched extended record.
pub struct DetailOverlay {
    pub champion: Champion,
    pub data: AsyncData<ChampionDetail>,
    pub chart: Option<StatChart>,
    pub scroll: u16,
}

impl DetailOverlay {
    pub fn new(champion: Champion, data: AsyncData<ChampionDetail>) -> Self {
        let chart = StatChart::from_ratings(&champion.ratings);
        Self {
            champion,
            data,
            chart,
            scroll: 0,
        }
    }
}

/// Skin gallery overlay. No fallback content on fetch failure.
pub struct GalleryOverlay {
    pub champion: Champion,
    pub data: AsyncData<ChampionDetail>,
    pub scroll: u16,
}

impl GalleryOverlay {
    pub fn new(champion: Champion, data: AsyncData<ChampionDetail>) -> Self {
        Self {
            champion,
            data,
            scroll: 0,
        }
    }
}

/// State machine for the two overlay panels and the shared scroll lock.
/// Invariant: the lock is engaged exactly while at least one overlay is open.
pub struct Overlays {
    detail: Option<DetailOverlay>,
    gallery: Option<GalleryOverlay>,
    scroll_locked: bool,
    next_seq: u64,
}

impl Overlays {
    pub fn new() -> Self {
        Self {
            detail: None,
            gallery: None,
            scroll_locked: false,
            next_seq: 0,
        }
    }

    /// Monotonic stamp for the next fetch request.
    pub fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    pub fn open_detail(&mut self, overlay: DetailOverlay) {
        // The previous overlay's chart must be gone before its replacement
        // exists; dropping the old overlay takes it along.
        if let Some(old) = self.detail.take() {
            drop(old);
        }
        self.detail = Some(overlay);
        self.update_lock();
    }

    pub fn open_gallery(&mut self, overlay: GalleryOverlay) {
        self.gallery = Some(overlay);
        self.update_lock();
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.update_lock();
    }

    pub fn close_gallery(&mut self) {
        self.gallery = None;
        self.update_lock();
    }

    /// Closes both overlays unconditionally; a no-op when none is open.
    pub fn close_all(&mut self) {
        self.detail = None;
        self.gallery = None;
        self.update_lock();
    }

    fn update_lock(&mut self) {
        self.scroll_locked = self.detail.is_some() || self.gallery.is_some();
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn detail(&self) -> Option<&DetailOverlay> {
        self.detail.as_ref()
    }

    pub fn gallery(&self) -> Option<&GalleryOverlay> {
        self.gallery.as_ref()
    }

    /// Scrolls whichever overlay is topmost (the gallery stacks above the
    /// detail panel).
    pub fn scroll_topmost(&mut self, delta: i32) {
        let scroll = if let Some(gallery) = &mut self.gallery {
            &mut gallery.scroll
        } else if let Some(detail) = &mut self.detail {
            &mut detail.scroll
        } else {
            return;
        };

        *scroll = if delta < 0 {
            scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            scroll.saturating_add(delta as u16)
        };
    }

    pub fn scroll_topmost_to_top(&mut self) {
        if let Some(gallery) = &mut self.gallery {
            gallery.scroll = 0;
        } else if let Some(detail) = &mut self.detail {
            detail.scroll = 0;
        }
    }

    /// Polls the async cells of every open overlay.
    pub fn tick(&mut self) {
        if let Some(detail) = &mut self.detail {
            detail.data.try_update();
        }
        if let Some(gallery) = &mut self.gallery {
            gallery.data.try_update();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::model::champion::Ratings;

    fn champion(ratings: Ratings) -> Champion {
        Champion {
            id: "Aatrox".into(),
            name: "Aatrox".to_string(),
            title: "the Darkin Blade".to_string(),
            blurb: "Once honored defenders of Shurima...".to_string(),
            tags: vec!["Fighter".to_string()],
            ratings,
        }
    }

    fn detail_overlay(seq: u64) -> DetailOverlay {
        let (_tx, rx) = mpsc::channel();
        DetailOverlay::new(
            champion(Ratings {
                attack: 8,
                defense: 4,
                magic: 3,
                difficulty: 4,
            }),
            AsyncData::new(seq, rx),
        )
    }

    fn gallery_overlay(seq: u64) -> GalleryOverlay {
        let (_tx, rx) = mpsc::channel();
        GalleryOverlay::new(champion(Ratings::default()), AsyncData::new(seq, rx))
    }

    #[test]
    fn scroll_lock_follows_open_overlays() {
        let mut overlays = Overlays::new();
        assert!(!overlays.scroll_locked());

        let seq = overlays.next_seq();
        overlays.open_detail(detail_overlay(seq));
        assert!(overlays.scroll_locked());

        let seq = overlays.next_seq();
        overlays.open_gallery(gallery_overlay(seq));
        assert!(overlays.scroll_locked());

        overlays.close_gallery();
        assert!(overlays.scroll_locked(), "detail still open");

        overlays.close_detail();
        assert!(!overlays.scroll_locked(), "lock released with zero open overlays");
    }

    #[test]
    fn close_all_is_unconditional_and_idempotent() {
        let mut overlays = Overlays::new();
        overlays.close_all();
        assert!(!overlays.scroll_locked());

        let seq = overlays.next_seq();
        overlays.open_detail(detail_overlay(seq));
        let seq = overlays.next_seq();
        overlays.open_gallery(gallery_overlay(seq));

        overlays.close_all();
        assert!(overlays.detail().is_none());
        assert!(overlays.gallery().is_none());
        assert!(!overlays.scroll_locked());

        overlays.close_all();
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn open_then_close_leaves_chart_slot_empty() {
        let mut overlays = Overlays::new();
        let seq = overlays.next_seq();
        overlays.open_detail(detail_overlay(seq));
        assert!(overlays.detail().unwrap().chart.is_some());

        overlays.close_detail();
        assert!(overlays.detail().is_none());
        assert!(!overlays.scroll_locked());
    }

    #[test]
    fn reopening_replaces_the_previous_overlay() {
        let mut overlays = Overlays::new();
        let seq = overlays.next_seq();
        overlays.open_detail(detail_overlay(seq));
        let first_seq = seq;

        let seq = overlays.next_seq();
        assert!(seq > first_seq);
        overlays.open_detail(detail_overlay(seq));

        // Still exactly one overlay, one chart.
        assert!(overlays.detail().is_some());
        assert!(overlays.detail().unwrap().chart.is_some());
    }

    #[test]
    fn chart_is_hidden_when_all_ratings_are_zero() {
        assert!(StatChart::from_ratings(&Ratings::default()).is_none());
        assert!(StatChart::from_ratings(&Ratings {
            attack: 0,
            defense: 0,
            magic: 1,
            difficulty: 0,
        })
        .is_some());
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let mut overlays = Overlays::new();
        let a = overlays.next_seq();
        let b = overlays.next_seq();
        let c = overlays.next_seq();
        assert!(a < b && b < c);
    }
}

//! TableView: maps a session snapshot plus screen state into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{SessionPhase, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GuessField, Track};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation state that is not part of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableUi {
    /// Playlist folder name shown in the header.
    pub playlist: String,
    /// Insertion slot, `0..=timeline.len()`.
    pub cursor: usize,
    /// Guess field being typed into, if any.
    pub editing: Option<GuessField>,
    /// One-line feedback for the last action.
    pub status: String,
    /// Whether the pending card's back (QR) image was found.
    pub card_back_available: bool,
}

const ACCENT: Rgb = Rgb::new(30, 215, 96);
const WRONG: Rgb = Rgb::new(230, 80, 80);
const MUTED: Rgb = Rgb::new(120, 120, 130);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const PANEL_BG: Rgb = Rgb::new(25, 25, 32);

const TIMELINE_TOP: u16 = 3;
const CARD_H: u16 = 5;
const PANEL_TOP: u16 = TIMELINE_TOP + 2 + CARD_H + 1;
const PANEL_H: u16 = 5;

/// Terminal renderer for the timeline table.
pub struct TableView {
    /// Card width in columns, borders included.
    card_w: u16,
    /// Gap between cards where the insertion marker is drawn.
    slot_w: u16,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            card_w: 16,
            slot_w: 3,
        }
    }
}

impl TableView {
    pub fn new(card_w: u16, slot_w: u16) -> Self {
        Self {
            card_w: card_w.max(6),
            slot_w: slot_w.max(1),
        }
    }

    /// How many cards fit across `width` columns next to their slots.
    pub fn visible_cards(&self, width: u16) -> usize {
        let usable = width.saturating_sub(2).saturating_sub(self.slot_w);
        ((usable / (self.card_w + self.slot_w)) as usize).max(1)
    }

    /// First card index drawn so that the cursor slot stays on screen.
    pub fn first_visible(&self, cursor: usize, len: usize, width: u16) -> usize {
        cursor.min(len).saturating_sub(self.visible_cards(width))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        ui: &TableUi,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        self.draw_header(fb, snap, ui);
        self.draw_timeline(fb, snap, ui);
        self.draw_current_card(fb, snap, ui);
        self.draw_guess(fb, snap, ui);
        self.draw_footer(fb, snap, ui);

        if snap.is_won {
            self.draw_overlay_text(fb, &format!("YOU WIN!  SCORE {}", snap.score), ACCENT);
        } else if snap.phase == SessionPhase::DeckExhausted {
            self.draw_overlay_text(fb, "DECK EXHAUSTED", WRONG);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, ui: &TableUi, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ui, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, ui: &TableUi) {
        let title = CellStyle::fg(Rgb::new(0, 0, 0)).on(ACCENT).bold();
        let mut x = fb.put_str(0, 0, " SPOTICARDS ", title);
        if !ui.playlist.is_empty() {
            x += fb.put_str(x + 1, 0, &ui.playlist, CellStyle::fg(TEXT).bold()) + 1;
        }

        let score = format!("Score {}  (bonus {}) ", snap.score, snap.bonus_points);
        let score_x = fb.width().saturating_sub(score.chars().count() as u16);
        if score_x > x + 1 {
            fb.put_str(score_x, 0, &score, CellStyle::fg(TEXT).bold());
        }

        const BAR_W: u16 = 20;
        let mut x = 1 + fb.put_str(
            1,
            1,
            &format!(
                "Correct {}/{} ",
                snap.cards_placed_correctly, snap.target_cards
            ),
            CellStyle::fg(TEXT),
        );
        let filled = (snap.progress() * BAR_W as f32).round() as u16;
        for i in 0..BAR_W {
            let (ch, style) = if i < filled {
                ('█', CellStyle::fg(ACCENT))
            } else {
                ('░', CellStyle::fg(MUTED).dim())
            };
            fb.put_char(x + i, 1, ch, style);
        }
        x += BAR_W + 2;

        let mut deck = format!("Deck {} left", snap.remaining);
        if snap.cards_forfeited > 0 {
            deck.push_str(&format!("  Skipped {}", snap.cards_forfeited));
        }
        fb.put_str(x, 1, &deck, CellStyle::fg(MUTED));
    }

    fn draw_timeline(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, ui: &TableUi) {
        let len = snap.timeline.len();
        let label = CellStyle::fg(MUTED).bold();
        fb.put_str(1, TIMELINE_TOP, "TIMELINE  oldest → newest", label);

        let first = self.first_visible(ui.cursor, len, fb.width());
        let last = (first + self.visible_cards(fb.width())).min(len);
        let marker_y = TIMELINE_TOP + 1;
        let cards_y = TIMELINE_TOP + 2;

        if first > 0 {
            fb.put_str(1, marker_y, &format!("◀ {} more", first), CellStyle::fg(MUTED));
        }
        if last < len {
            let more = format!("{} more ▶", len - last);
            let mx = fb.width().saturating_sub(more.chars().count() as u16 + 1);
            fb.put_str(mx, marker_y, &more, CellStyle::fg(MUTED));
        }

        let highlight = snap
            .last_placement
            .as_ref()
            .filter(|p| p.position < len)
            .map(|p| (p.position, p.correct));

        let mut x = 1;
        for slot in first..=last {
            self.draw_slot(fb, x, marker_y, cards_y, slot == ui.cursor, snap.can_place());
            x += self.slot_w;
            if slot == last {
                break;
            }
            let border = match highlight {
                Some((pos, true)) if pos == slot => CellStyle::fg(ACCENT).bold(),
                Some((pos, false)) if pos == slot => CellStyle::fg(WRONG).bold(),
                _ => CellStyle::fg(TEXT),
            };
            self.draw_card(fb, x, cards_y, &snap.timeline[slot], border);
            x += self.card_w;
        }

        if len == 0 {
            let hint = if snap.can_place() {
                "empty: press enter to place your first card"
            } else {
                "empty: press n to draw a card"
            };
            fb.put_str(x + 1, cards_y + CARD_H / 2, hint, CellStyle::fg(MUTED).dim());
        }
    }

    fn draw_slot(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        marker_y: u16,
        cards_y: u16,
        active: bool,
        armed: bool,
    ) {
        if !active {
            return;
        }
        let color = if armed { ACCENT } else { MUTED };
        let mid = x + self.slot_w / 2;
        fb.put_char(mid, marker_y, '▼', CellStyle::fg(color).bold());
        for dy in 0..CARD_H {
            fb.put_char(mid, cards_y + dy, '┃', CellStyle::fg(color));
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, track: &Track, border: CellStyle) {
        let inner = self.card_w.saturating_sub(2);
        fb.fill_rect(x + 1, y + 1, inner, CARD_H - 2, ' ', CellStyle::fg(TEXT).on(PANEL_BG));
        fb.draw_box(x, y, self.card_w, CARD_H, border);

        let year = track.release_year.to_string();
        let pad = inner.saturating_sub(year.len() as u16) / 2;
        fb.put_str(
            x + 1 + pad,
            y + 1,
            &year,
            CellStyle::fg(ACCENT).on(PANEL_BG).bold(),
        );
        fb.put_str_fit(
            x + 1,
            y + 2,
            &track.name_cleaned,
            inner,
            CellStyle::fg(TEXT).on(PANEL_BG),
        );
        fb.put_str_fit(
            x + 1,
            y + 3,
            &track.artists,
            inner,
            CellStyle::fg(MUTED).on(PANEL_BG),
        );
    }

    fn draw_current_card(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, ui: &TableUi) {
        let w = 30;
        fb.draw_box(1, PANEL_TOP, w, PANEL_H, CellStyle::fg(TEXT));
        fb.put_str(3, PANEL_TOP, " CURRENT CARD ", CellStyle::fg(TEXT).bold());

        let inner = w - 4;
        if snap.current_card.is_some() {
            fb.put_str_fit(3, PANEL_TOP + 1, "???? - face down", inner, CellStyle::fg(ACCENT).bold());
            let qr = if ui.card_back_available {
                "QR image ready"
            } else {
                "QR image missing"
            };
            fb.put_str_fit(3, PANEL_TOP + 2, qr, inner, CellStyle::fg(MUTED));
            fb.put_str_fit(
                3,
                PANEL_TOP + 3,
                "place it on the timeline",
                inner,
                CellStyle::fg(MUTED).dim(),
            );
        } else if snap.phase == SessionPhase::DeckExhausted {
            fb.put_str_fit(3, PANEL_TOP + 1, "no cards left", inner, CellStyle::fg(MUTED));
            fb.put_str_fit(3, PANEL_TOP + 2, "press r for a new game", inner, CellStyle::fg(MUTED));
        } else {
            fb.put_str_fit(3, PANEL_TOP + 1, "press n to draw", inner, CellStyle::fg(MUTED));
        }
    }

    fn draw_guess(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, ui: &TableUi) {
        let x = 33;
        let w = fb.width().saturating_sub(x + 1).min(48);
        if w < 16 {
            return;
        }
        fb.draw_box(x, PANEL_TOP, w, PANEL_H, CellStyle::fg(TEXT));
        fb.put_str(x + 2, PANEL_TOP, " GUESS ", CellStyle::fg(TEXT).bold());

        for (row, field) in [GuessField::Title, GuessField::Artist].into_iter().enumerate() {
            let y = PANEL_TOP + 1 + row as u16;
            let editing = ui.editing == Some(field);
            let label_style = if editing {
                CellStyle::fg(ACCENT).bold()
            } else {
                CellStyle::fg(MUTED)
            };
            let lx = x + 2 + fb.put_str(x + 2, y, &format!("{:<7}", field.label()), label_style);

            let value = snap.guess.field(field);
            let avail = (x + w - 2).saturating_sub(lx);
            let style = if editing {
                CellStyle::fg(TEXT).on(PANEL_BG).bold()
            } else {
                CellStyle::fg(TEXT)
            };
            if editing {
                fb.fill_rect(lx, y, avail, 1, ' ', style);
                // Keep the tail of long input visible while typing.
                let chars = value.chars().count();
                let keep = avail.saturating_sub(1) as usize;
                let tail: String = value.chars().skip(chars.saturating_sub(keep)).collect();
                let written = fb.put_str(lx, y, &tail, style);
                fb.put_char(lx + written, y, '▏', CellStyle::fg(ACCENT).on(PANEL_BG));
            } else {
                fb.put_str_fit(lx, y, value, avail, style);
            }
        }

        let hint = if snap.current_card.is_some() {
            "t/a edit  g check"
        } else {
            "draw a card first"
        };
        fb.put_str_fit(x + 2, PANEL_TOP + 3, hint, w.saturating_sub(4), CellStyle::fg(MUTED).dim());
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, ui: &TableUi) {
        let h = fb.height();
        let w = fb.width();

        if let Some(p) = &snap.last_placement {
            let y = PANEL_TOP + PANEL_H + 1;
            if y + 2 < h {
                let (verdict, color) = if p.correct {
                    ("correct", ACCENT)
                } else {
                    ("wrong", WRONG)
                };
                let line = format!(
                    "Last: \"{}\" by {} ({}) - {}",
                    p.card.name_cleaned, p.card.artists, p.card.release_year, verdict
                );
                fb.put_str_fit(1, y, &line, w.saturating_sub(2), CellStyle::fg(color));
            }
        }

        if h >= 2 && !ui.status.is_empty() {
            fb.put_str_fit(1, h - 2, &ui.status, w.saturating_sub(2), CellStyle::fg(TEXT).bold());
        }

        let help = if ui.editing.is_some() {
            "type to edit  tab switch field  enter check  esc done  ctrl-c quit"
        } else {
            "n draw  ←/→ move  enter place  t/a guess  g check  r new game  q quit"
        };
        if h >= 1 {
            fb.put_str_fit(1, h - 1, help, w.saturating_sub(2), CellStyle::fg(MUTED).dim());
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, text: &str, color: Rgb) {
        let text_w = text.chars().count() as u16;
        let box_w = text_w + 4;
        let box_h = 3;
        if fb.width() < box_w || fb.height() < box_h {
            return;
        }
        let x = (fb.width() - box_w) / 2;
        let y = TIMELINE_TOP + 2 + (CARD_H.saturating_sub(box_h)) / 2;
        let y = y.min(fb.height() - box_h);

        let style = CellStyle::fg(color).on(PANEL_BG).bold();
        fb.fill_rect(x, y, box_w, box_h, ' ', style);
        fb.draw_box(x, y, box_w, box_h, style);
        fb.put_str(x + 2, y + 1, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_cards_never_zero() {
        let view = TableView::default();
        assert_eq!(view.visible_cards(0), 1);
        // 2 margin + 3 leading slot + 4 * (16 + 3)
        assert_eq!(view.visible_cards(81), 4);
    }

    #[test]
    fn first_visible_follows_cursor() {
        let view = TableView::default();
        let width = 81;
        assert_eq!(view.first_visible(0, 10, width), 0);
        assert_eq!(view.first_visible(4, 10, width), 0);
        assert_eq!(view.first_visible(7, 10, width), 3);
        assert_eq!(view.first_visible(10, 10, width), 6);
        // A stale cursor past the end is treated as the end.
        assert_eq!(view.first_visible(99, 10, width), 6);
    }
}

use std::{
    io::stdout,
    sync::mpsc,
    thread,
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::{
    model::{champion::ChampionDetail, ids::ChampionId},
    service::{
        data_manager::DataManager,
        dictionary::TagDictionary,
        filter::{self, FILTER_TAGS},
    },
    ui::{
        overlay::{DetailOverlay, GalleryOverlay, Overlays},
        views::{
            cards::{card_lines, empty_placeholder, CardViewModel, EmptyReason, CARD_HEIGHT},
            detail::detail_lines,
            gallery::gallery_lines,
        },
        AsyncData, ReplError,
    },
};

const GOLD: Color = Color::Rgb(200, 155, 60);
const PAGE_CARDS: i32 = 3;
/// Offset past which the "back to top" hint appears in the footer.
const SCROLL_HINT_THRESHOLD: u16 = 2 * CARD_HEIGHT;

struct App {
    manager: DataManager,
    dictionary: TagDictionary,
    search: String,
    tag_index: usize,
    selected: usize,
    scroll_offset: u16,
    overlays: Overlays,
    should_quit: bool,
}

impl App {
    fn new(manager: DataManager) -> Self {
        let dictionary = TagDictionary::for_locale(manager.locale());
        Self {
            manager,
            dictionary,
            search: String::new(),
            tag_index: 0,
            selected: 0,
            scroll_offset: 0,
            overlays: Overlays::new(),
            should_quit: false,
        }
    }

    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), ReplError> {
        loop {
            self.overlays.tick();
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    /// Exactly one filter criterion is active at a time: a non-empty search
    /// wins, otherwise the selected tag applies.
    fn filtered_cards(&self) -> (Vec<CardViewModel>, EmptyReason) {
        let catalog = self.manager.champions();
        let (list, reason) = if !self.search.trim().is_empty() {
            (
                filter::filter_by_text(catalog, &self.dictionary, &self.search),
                EmptyReason::TextSearch,
            )
        } else {
            (
                filter::filter_by_tag(catalog, FILTER_TAGS[self.tag_index]),
                EmptyReason::TagFilter,
            )
        };

        let cards = list
            .iter()
            .map(|champ| CardViewModel::build(champ, &self.dictionary))
            .collect();
        (cards, reason)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let locked = self.overlays.scroll_locked();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.should_quit = true,
            // The cancel key targets both overlays unconditionally; a no-op
            // when none is open.
            KeyCode::Esc => self.overlays.close_all(),
            KeyCode::Char('u') if ctrl && !locked => {
                self.search.clear();
                self.reset_list();
            }
            KeyCode::Char('s') if ctrl && !locked => self.open_gallery(),
            KeyCode::Enter if !locked => self.open_detail(),
            KeyCode::Tab if !locked => {
                self.tag_index = (self.tag_index + 1) % FILTER_TAGS.len();
                self.search.clear();
                self.reset_list();
            }
            KeyCode::BackTab if !locked => {
                self.tag_index = (self.tag_index + FILTER_TAGS.len() - 1) % FILTER_TAGS.len();
                self.search.clear();
                self.reset_list();
            }
            KeyCode::Up => {
                if locked {
                    self.overlays.scroll_topmost(-1);
                } else {
                    self.move_selection(-1);
                }
            }
            KeyCode::Down => {
                if locked {
                    self.overlays.scroll_topmost(1);
                } else {
                    self.move_selection(1);
                }
            }
            KeyCode::PageUp => {
                if locked {
                    self.overlays.scroll_topmost(-10);
                } else {
                    self.move_selection(-PAGE_CARDS);
                }
            }
            KeyCode::PageDown => {
                if locked {
                    self.overlays.scroll_topmost(10);
                } else {
                    self.move_selection(PAGE_CARDS);
                }
            }
            KeyCode::Home => {
                if locked {
                    self.overlays.scroll_topmost_to_top();
                } else {
                    self.selected = 0;
                    self.scroll_offset = 0;
                }
            }
            KeyCode::Backspace if !locked => {
                self.search.pop();
                self.tag_index = 0;
                self.reset_list();
            }
            // Live search: every printable keystroke re-filters and resets
            // the tag criterion.
            KeyCode::Char(c) if !ctrl && !locked => {
                self.search.push(c);
                self.tag_index = 0;
                self.reset_list();
            }
            _ => {}
        }
    }

    fn reset_list(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    fn move_selection(&mut self, delta: i32) {
        let (cards, _) = self.filtered_cards();
        if cards.is_empty() {
            self.selected = 0;
            return;
        }

        let last = cards.len() - 1;
        let next = self.selected as i32 + delta;
        self.selected = next.clamp(0, last as i32) as usize;
    }

    fn selected_champion_id(&self) -> Option<ChampionId> {
        let (cards, _) = self.filtered_cards();
        cards.get(self.selected).map(|card| card.id.clone())
    }

    fn open_detail(&mut self) {
        let Some(id) = self.selected_champion_id() else { return };
        let Some(champ) = self.manager.champion(&id).cloned() else { return };

        let seq = self.overlays.next_seq();
        let data = self.spawn_detail_fetch(id, seq);
        self.overlays.open_detail(DetailOverlay::new(champ, data));
    }

    fn open_gallery(&mut self) {
        let Some(id) = self.selected_champion_id() else { return };
        let Some(champ) = self.manager.champion(&id).cloned() else { return };

        let seq = self.overlays.next_seq();
        let data = self.spawn_detail_fetch(id, seq);
        self.overlays.open_gallery(GalleryOverlay::new(champ, data));
    }

    fn spawn_detail_fetch(&self, id: ChampionId, seq: u64) -> AsyncData<ChampionDetail> {
        let fetcher = self.manager.detail_fetcher();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = fetcher.fetch(&id);
            let _ = tx.send((seq, result));
        });

        AsyncData::new(seq, rx)
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.size());

        self.draw_header(frame, chunks[0]);
        self.draw_filter_bar(frame, chunks[1]);
        self.draw_card_list(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);

        if let Some(overlay) = self.overlays.detail() {
            let area = centered_rect(80, 80, frame.size());
            frame.render_widget(Clear, area);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD))
                .title("Champion Details (Esc to close)")
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),
                    Constraint::Length(if overlay.chart.is_some() { 10 } else { 0 }),
                ])
                .split(inner);

            let paragraph = Paragraph::new(detail_lines(overlay, self.manager.version()))
                .wrap(Wrap { trim: false })
                .scroll((overlay.scroll, 0));
            frame.render_widget(paragraph, parts[0]);

            if let Some(chart) = &overlay.chart {
                chart.render(frame, parts[1]);
            }
        }

        // The gallery stacks above the detail panel when both are open.
        if let Some(overlay) = self.overlays.gallery() {
            let area = centered_rect(70, 70, frame.size());
            frame.render_widget(Clear, area);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD))
                .title("Skin Gallery (Esc to close)")
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let paragraph = Paragraph::new(gallery_lines(overlay, &self.dictionary))
                .wrap(Wrap { trim: false })
                .scroll((overlay.scroll, 0));
            frame.render_widget(paragraph, inner);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(format!(
            " Patch {}   Locale {}",
            self.manager.version(),
            self.manager.locale()
        ))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD))
                .title("Champdex - Champion Catalog")
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(header, area);
    }

    fn draw_filter_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::raw(self.search.clone()),
            Span::styled("▏  ", Style::default().fg(Color::DarkGray)),
        ];

        for (index, tag) in FILTER_TAGS.iter().enumerate() {
            let label = self.dictionary.label(tag);
            if index == self.tag_index && self.search.trim().is_empty() {
                spans.push(Span::styled(
                    format!("[{}] ", label),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {}  ", label),
                    Style::default().fg(Color::Gray),
                ));
            }
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Filters (type to search, Tab for classes)"),
        );
        frame.render_widget(bar, area);
    }

    fn draw_card_list(&mut self, frame: &mut Frame, area: Rect) {
        let (cards, reason) = self.filtered_cards();
        if cards.is_empty() {
            let placeholder = Paragraph::new(empty_placeholder(reason)).wrap(Wrap { trim: false });
            frame.render_widget(placeholder, area);
            return;
        }

        if self.selected >= cards.len() {
            self.selected = cards.len() - 1;
        }
        self.ensure_selection_visible(area.height);

        // No wrapping here: every card occupies exactly CARD_HEIGHT rows, which
        // keeps the selection-visibility math honest.
        let paragraph =
            Paragraph::new(card_lines(&cards, self.selected)).scroll((self.scroll_offset, 0));
        frame.render_widget(paragraph, area);
    }

    fn ensure_selection_visible(&mut self, viewport: u16) {
        if viewport == 0 {
            return;
        }

        let selection_top = self.selected as u16 * CARD_HEIGHT;
        if selection_top < self.scroll_offset {
            self.scroll_offset = selection_top;
        } else if selection_top + CARD_HEIGHT > self.scroll_offset + viewport {
            self.scroll_offset = selection_top + CARD_HEIGHT - viewport;
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let mut hints = String::from(
            "Type: search    Ctrl+U: clear    Tab: class    Enter: details    Ctrl+S: skins    Esc: close    Ctrl+Q: quit",
        );
        if self.scroll_offset > SCROLL_HINT_THRESHOLD {
            hints.push_str("    [Home] back to top");
        }

        let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

pub fn run(manager: DataManager) -> Result<(), ReplError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(manager);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

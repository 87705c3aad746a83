//! Dashboard state and key handling

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::CleanTable;
use crate::query::{unique_orders, unique_units, RowFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Orders,
    Analysis,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Search, Tab::Orders, Tab::Analysis, Tab::Help];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Orders => "Orders",
            Tab::Analysis => "Analysis",
            Tab::Help => "Help",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

pub struct App {
    pub table: Arc<CleanTable>,
    pub tab: Tab,
    pub should_quit: bool,

    // search tab
    pub query: String,
    pub units: Vec<String>,
    pub orders: Vec<String>,
    /// 0 means "all", otherwise `units[unit_idx - 1]`
    pub unit_idx: usize,
    /// 0 means "all", otherwise `orders[order_idx - 1]`
    pub order_idx: usize,
    pub filtered: Vec<usize>,
    pub selected: usize,

    // orders tab
    pub order_selected: usize,
}

impl App {
    pub fn new(table: Arc<CleanTable>) -> App {
        let units = unique_units(&table);
        let orders = unique_orders(&table);
        let mut app = App {
            table,
            tab: Tab::Search,
            should_quit: false,
            query: String::new(),
            units,
            orders,
            unit_idx: 0,
            order_idx: 0,
            filtered: Vec::new(),
            selected: 0,
            order_selected: 0,
        };
        app.refresh();
        app
    }

    pub fn tab_index(&self) -> usize {
        self.tab.index()
    }

    pub fn unit_filter(&self) -> Option<&String> {
        self.unit_idx.checked_sub(1).and_then(|i| self.units.get(i))
    }

    pub fn order_filter(&self) -> Option<&String> {
        self.order_idx
            .checked_sub(1)
            .and_then(|i| self.orders.get(i))
    }

    pub fn filter(&self) -> RowFilter {
        RowFilter {
            query: (!self.query.is_empty()).then(|| self.query.clone()),
            unit: self.unit_filter().cloned(),
            order_no: self.order_filter().cloned(),
        }
    }

    fn refresh(&mut self) {
        self.filtered = self.filter().apply(&self.table);
        self.selected = self.selected.min(self.filtered.len().saturating_sub(1));
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') => {
                    self.unit_idx = (self.unit_idx + 1) % (self.units.len() + 1);
                    self.refresh();
                }
                KeyCode::Char('o') => {
                    self.order_idx = (self.order_idx + 1) % (self.orders.len() + 1);
                    self.refresh();
                }
                KeyCode::Char('l') => {
                    self.query.clear();
                    self.unit_idx = 0;
                    self.order_idx = 0;
                    self.refresh();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            _ => match self.tab {
                Tab::Search => self.on_search_key(key.code),
                Tab::Orders => self.on_orders_key(key.code),
                Tab::Analysis | Tab::Help => {
                    if key.code == KeyCode::Char('q') {
                        self.should_quit = true;
                    }
                }
            },
        }
    }

    fn on_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.refresh();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refresh();
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.filtered.len().saturating_sub(1));
            }
            _ => {}
        }
    }

    fn on_orders_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.order_selected = self.order_selected.saturating_sub(1),
            KeyCode::Down => {
                self.order_selected =
                    (self.order_selected + 1).min(self.orders.len().saturating_sub(1));
            }
            _ => {}
        }
    }
}

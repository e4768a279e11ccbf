use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{error, info, warn};

use crate::models::{ClassList, Round, VocabEntry};
use crate::round::RoundGenerator;
use crate::session::{is_correct_selection, ClassSession, Score};
use crate::storage::save_entries;
use crate::vocab::{parse_synonym_list, VocabStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Menu,
    Quiz,
    Browse,
    Edit,
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    AllWords,
    Class(ClassList),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Headword,
    Synonyms,
    ClassFlag,
}

#[derive(Debug, Clone)]
pub struct EditForm {
    pub headword: String,
    pub synonyms: String,
    pub is_class_word: bool,
    pub field: EditField,
    /// Set when editing an existing word rather than adding a new one.
    pub editing: bool,
}

impl EditForm {
    pub fn blank() -> Self {
        Self {
            headword: String::new(),
            synonyms: String::new(),
            is_class_word: false,
            field: EditField::Headword,
            editing: false,
        }
    }

    pub fn from_entry(entry: &VocabEntry) -> Self {
        Self {
            headword: entry.headword.clone(),
            synonyms: entry.synonyms.join(", "),
            is_class_word: entry.is_class_word,
            field: EditField::Synonyms,
            editing: true,
        }
    }
}

pub const MENU_ITEMS: &[&str] = &[
    "All words",
    "Class: first list",
    "Class: second list",
    "Class: all lists",
    "Browse",
    "Add word",
    "Stats",
];

pub struct App {
    pub store: VocabStore,
    pub user_data: Option<PathBuf>,
    pub generator: RoundGenerator,
    pub current_screen: CurrentScreen,
    pub menu_selection: usize,
    pub quiz_mode: QuizMode,
    pub round: Option<Round>,
    pub selected: Vec<String>,
    pub feedback: Option<bool>,
    pub score: Score,
    pub streak: u32,
    pub class_session: Option<ClassSession>,
    pub browse_query: String,
    pub browse_selection: usize,
    pub edit: EditForm,
    pub status: Option<String>,
    pub exit: bool,
}

impl App {
    /// `user_data` is where edits are saved; `None` keeps them in memory.
    pub fn new(store: VocabStore, generator: RoundGenerator, user_data: Option<PathBuf>) -> Self {
        Self {
            store,
            user_data,
            generator,
            current_screen: CurrentScreen::Menu,
            menu_selection: 0,
            quiz_mode: QuizMode::AllWords,
            round: None,
            selected: Vec::new(),
            feedback: None,
            score: Score::new(),
            streak: 0,
            class_session: None,
            browse_query: String::new(),
            browse_selection: 0,
            edit: EditForm::blank(),
            status: None,
            exit: false,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.exit = true;
            return;
        }

        match self.current_screen {
            CurrentScreen::Menu => self.handle_menu_key(key.code),
            CurrentScreen::Quiz => self.handle_quiz_key(key.code),
            CurrentScreen::Browse => self.handle_browse_key(key.code),
            CurrentScreen::Edit => self.handle_edit_key(key.code),
            CurrentScreen::Stats => match key.code {
                KeyCode::Char('q') => self.exit = true,
                _ => self.current_screen = CurrentScreen::Menu,
            },
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Down => self.menu_selection = (self.menu_selection + 1) % MENU_ITEMS.len(),
            KeyCode::Up => {
                self.menu_selection = (self.menu_selection + MENU_ITEMS.len() - 1) % MENU_ITEMS.len()
            }
            KeyCode::Enter => self.select_menu_item(),
            _ => {}
        }
    }

    fn select_menu_item(&mut self) {
        self.status = None;
        match self.menu_selection {
            0 => self.start_quiz(QuizMode::AllWords),
            1 => self.start_quiz(QuizMode::Class(ClassList::First)),
            2 => self.start_quiz(QuizMode::Class(ClassList::Second)),
            3 => self.start_quiz(QuizMode::Class(ClassList::All)),
            4 => {
                self.browse_query.clear();
                self.browse_selection = 0;
                self.current_screen = CurrentScreen::Browse;
            }
            5 => {
                self.edit = EditForm::blank();
                self.current_screen = CurrentScreen::Edit;
            }
            _ => self.current_screen = CurrentScreen::Stats,
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.current_screen = CurrentScreen::Menu,
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Char(c @ '1'..='8') => {
                let index = c as usize - '1' as usize;
                self.toggle_option(index);
            }
            KeyCode::Enter => {
                if self.feedback.is_none() && self.round.is_some() {
                    self.check_answer();
                } else {
                    self.next_round();
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('n') if self.feedback.is_some() => self.next_round(),
            KeyCode::Char('r') if self.round.is_none() => self.restart_session(),
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.current_screen = CurrentScreen::Menu,
            KeyCode::Down => {
                let len = self.browse_results().len();
                if len > 0 {
                    self.browse_selection = (self.browse_selection + 1).min(len - 1);
                }
            }
            KeyCode::Up => self.browse_selection = self.browse_selection.saturating_sub(1),
            KeyCode::Enter => {
                if let Some(entry) = self.selected_browse_entry() {
                    self.practice(&entry);
                }
            }
            KeyCode::Tab => {
                if let Some(entry) = self.selected_browse_entry() {
                    self.edit = EditForm::from_entry(&entry);
                    self.current_screen = CurrentScreen::Edit;
                }
            }
            KeyCode::Backspace => {
                self.browse_query.pop();
                self.browse_selection = 0;
            }
            KeyCode::Char(c) => {
                self.browse_query.push(c);
                self.browse_selection = 0;
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.current_screen = if self.edit.editing {
                    CurrentScreen::Browse
                } else {
                    CurrentScreen::Menu
                }
            }
            KeyCode::Tab => {
                self.edit.field = match self.edit.field {
                    EditField::Headword => EditField::Synonyms,
                    EditField::Synonyms => EditField::ClassFlag,
                    EditField::ClassFlag => EditField::Headword,
                }
            }
            KeyCode::Enter => self.save_edit(),
            KeyCode::Backspace => {
                match self.edit.field {
                    EditField::Headword => self.edit.headword.pop(),
                    EditField::Synonyms => self.edit.synonyms.pop(),
                    EditField::ClassFlag => None,
                };
            }
            KeyCode::Char(' ') if self.edit.field == EditField::ClassFlag => {
                self.edit.is_class_word = !self.edit.is_class_word;
            }
            KeyCode::Char(c) => match self.edit.field {
                // Editing an existing word keeps its headword fixed.
                EditField::Headword if !self.edit.editing => self.edit.headword.push(c),
                EditField::Synonyms => self.edit.synonyms.push(c),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn start_quiz(&mut self, mode: QuizMode) {
        self.quiz_mode = mode;
        self.class_session = None;

        match mode {
            QuizMode::AllWords => {
                if self.store.is_empty() {
                    self.status = Some("The vocabulary is empty. Add a word first.".to_string());
                    return;
                }
            }
            QuizMode::Class(list) => {
                let words = self.store.class_pool(list);
                if words.is_empty() {
                    self.status = Some(format!("{} has no words.", list.label()));
                    return;
                }
                info!("Starting class session '{}' with {} words", list.label(), words.len());
                self.class_session = Some(ClassSession::new(words, self.generator.rng()));
            }
        }

        self.current_screen = CurrentScreen::Quiz;
        self.next_round();
    }

    /// Quizzes a specific word, e.g. one picked in the browse view.
    pub fn practice(&mut self, entry: &VocabEntry) {
        self.quiz_mode = QuizMode::AllWords;
        self.class_session = None;
        self.current_screen = CurrentScreen::Quiz;
        self.load_round(Some(entry));
    }

    pub fn next_round(&mut self) {
        match self.quiz_mode {
            QuizMode::AllWords => self.load_round(None),
            QuizMode::Class(_) => {
                let next = self.class_session.as_mut().and_then(ClassSession::next_word);
                match next {
                    Some(word) => self.load_round(Some(&word)),
                    None => {
                        self.round = None;
                        self.reset_answer();
                    }
                }
            }
        }
    }

    fn load_round(&mut self, pinned: Option<&VocabEntry>) {
        self.reset_answer();
        // Class pools are small, so distractors always come from the full pool.
        let result = self.generator.next_round(self.store.all(), pinned, None);
        match result {
            Ok(round) => self.round = Some(round),
            Err(e) => {
                warn!("Could not start a round: {}", e);
                self.round = None;
                self.status = Some(e.to_string());
                self.current_screen = CurrentScreen::Menu;
            }
        }
    }

    fn reset_answer(&mut self) {
        self.selected.clear();
        self.feedback = None;
    }

    pub fn restart_session(&mut self) {
        if let Some(session) = self.class_session.as_mut() {
            session.restart(self.generator.rng());
            self.next_round();
        }
    }

    pub fn toggle_option(&mut self, index: usize) {
        if self.feedback.is_some() {
            return;
        }
        let Some(option) = self.round.as_ref().and_then(|r| r.options.get(index)) else {
            return;
        };
        match self.selected.iter().position(|id| *id == option.id) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(option.id.clone()),
        }
    }

    pub fn is_selected(&self, option_id: &str) -> bool {
        self.selected.iter().any(|id| id == option_id)
    }

    pub fn check_answer(&mut self) {
        let Some(round) = &self.round else {
            return;
        };
        if self.feedback.is_some() {
            return;
        }

        let correct = is_correct_selection(&round.options, &self.selected);
        self.feedback = Some(correct);
        self.score.record(correct);
        self.streak = if correct { self.streak + 1 } else { 0 };
        if let Some(session) = self.class_session.as_mut() {
            session.record(correct);
        }
    }

    pub fn browse_results(&self) -> Vec<&VocabEntry> {
        self.store.search(&self.browse_query)
    }

    fn selected_browse_entry(&self) -> Option<VocabEntry> {
        self.browse_results()
            .get(self.browse_selection)
            .map(|e| (*e).clone())
    }

    pub fn save_edit(&mut self) {
        let synonyms = parse_synonym_list(&self.edit.synonyms);
        let saved = match self
            .store
            .upsert_user(&self.edit.headword, &synonyms, self.edit.is_class_word)
        {
            Ok(entry) => entry,
            Err(e) => {
                self.status = Some(e.to_string());
                return;
            }
        };

        self.status = Some(format!("Saved '{}'", saved.headword));
        if let Some(path) = &self.user_data {
            if let Err(e) = save_entries(path, self.store.user_entries()) {
                error!("Failed to persist user vocabulary: {}", e);
                self.status = Some(format!("Saved '{}' for this session only: {}", saved.headword, e));
            }
        }

        self.edit = EditForm::blank();
        self.browse_query = saved.headword;
        self.browse_selection = 0;
        self.current_screen = CurrentScreen::Browse;
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

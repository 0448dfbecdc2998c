//! Interactive session.
//!
//! The session is split in two: [`handle`] turns one [`Request`] into a [`CmdResult`]
//! and never fails (errors become messages), while [`Session`] owns the input loop,
//! prompts, and printing. The store is passed in rather than held globally.

use super::print::{write_book_blocks, write_messages};
use console::Term;
use log::debug;
use shelf::api::{CmdMessage, CmdResult, ShelfApi};
use shelf::model::Locale;
use shelf::store::fs::FileBackend;
use shelf::store::StorageBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const MENU: &str = "Choose a command:\n\
1. Add a book\n\
2. Delete a book\n\
3. Search books\n\
4. List books\n\
5. Change book status\n\
6. Exit\n\
Command: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Search,
    List,
    SetStatus,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Delete),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::List),
            "5" => Ok(MenuChoice::SetStatus),
            "6" => Ok(MenuChoice::Exit),
            other => Err(format!("No such command: {}", other)),
        }
    }
}

/// A fully-prompted user action, still as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add {
        title: String,
        author: String,
        year: String,
    },
    Delete {
        id: String,
    },
    Search {
        title: String,
        author: String,
        year: String,
    },
    List,
    SetStatus {
        id: String,
        status: String,
    },
}

pub fn handle<B: StorageBackend>(api: &mut ShelfApi<B>, request: Request) -> CmdResult {
    let outcome = match request {
        Request::Add {
            title,
            author,
            year,
        } => api.add_book(&title, &author, &year),
        Request::Delete { id } => api.delete_book(&id),
        Request::Search {
            title,
            author,
            year,
        } => api.search_books(&title, &author, &year),
        Request::List => api.list_books(),
        Request::SetStatus { id, status } => api.set_status(&id, &status),
    };

    outcome.unwrap_or_else(|e| {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error(e.to_string()));
        result
    })
}

pub struct Session<R, W> {
    input: R,
    output: W,
    locale: Locale,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, locale: Locale) -> Self {
        Self {
            input,
            output,
            locale,
            clear_screen: false,
        }
    }

    /// Clear the terminal before showing each command's output.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Open the file store at `path`, asking for another path while opening fails.
    /// Returns `None` when the user gives up (empty answer or closed input).
    pub fn open_store(&mut self, path: PathBuf) -> io::Result<Option<ShelfApi<FileBackend>>> {
        let mut path = path;
        loop {
            match ShelfApi::open(&path) {
                Ok(api) => return Ok(Some(api)),
                Err(e) => {
                    write_messages(&mut self.output, &[CmdMessage::error(e.to_string())])?;
                    let answer =
                        match self.prompt("Path to a JSON book file (empty to quit): ") {
                            Ok(answer) => answer,
                            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                            Err(e) => return Err(e),
                        };
                    if answer.trim().is_empty() {
                        return Ok(None);
                    }
                    path = PathBuf::from(answer.trim());
                }
            }
        }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run<B: StorageBackend>(&mut self, api: &mut ShelfApi<B>) -> io::Result<()> {
        match self.run_loop(api) {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
            other => other,
        }
    }

    fn run_loop<B: StorageBackend>(&mut self, api: &mut ShelfApi<B>) -> io::Result<()> {
        loop {
            let line = self.prompt(MENU)?;
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(msg) => {
                    self.clear();
                    write_messages(&mut self.output, &[CmdMessage::warning(msg)])?;
                    continue;
                }
            };

            self.clear();
            let Some(request) = self.read_request(choice)? else {
                return Ok(());
            };
            let result = handle(api, request);
            write_messages(&mut self.output, &result.messages)?;
            write_book_blocks(&mut self.output, &result.listed_books, self.locale)?;
        }
    }

    /// Prompt for the fields `choice` needs. `None` means the user chose to exit.
    fn read_request(&mut self, choice: MenuChoice) -> io::Result<Option<Request>> {
        let request = match choice {
            MenuChoice::Add => Request::Add {
                title: self.prompt("Title: ")?,
                author: self.prompt("Author: ")?,
                year: self.prompt("Year: ")?,
            },
            MenuChoice::Delete => Request::Delete {
                id: self.prompt("ID: ")?,
            },
            MenuChoice::Search => {
                writeln!(self.output, "Leave a field empty to skip it.")?;
                Request::Search {
                    title: self.prompt("Title: ")?,
                    author: self.prompt("Author: ")?,
                    year: self.prompt("Year: ")?,
                }
            }
            MenuChoice::List => Request::List,
            MenuChoice::SetStatus => Request::SetStatus {
                id: self.prompt("ID: ")?,
                status: self.prompt("Status (0 - in stock | 1 - issued): ")?,
            },
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(request))
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn clear(&self) {
        if self.clear_screen {
            if let Err(e) = Term::stdout().clear_screen() {
                debug!("Could not clear the screen: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::library::Library;
    use shelf::model::Status;
    use shelf::store::memory::MemBackend;
    use std::io::Cursor;

    const TWO_BOOKS: &str = r#"[
        {"id": 0, "title": "Book1", "author": "Author1", "year": 2000, "status": 0},
        {"id": 1, "title": "Book2", "author": "Author2", "year": 2001, "status": 1}
    ]"#;

    fn api() -> ShelfApi<MemBackend> {
        ShelfApi::new(Library::new(MemBackend::from_json(TWO_BOOKS)).unwrap())
    }

    fn run_script(api: &mut ShelfApi<MemBackend>, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Session::new(Cursor::new(script.to_string()), &mut output, Locale::En)
            .run(api)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Add));
        assert_eq!(" 6\n".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("7".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn handle_turns_errors_into_messages() {
        let mut api = api();
        let result = handle(&mut api, Request::Delete { id: "9".into() });
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No book with ID 9");
        assert_eq!(api.library().len(), 2);
    }

    #[test]
    fn handle_dispatches_set_status() {
        let mut api = api();
        handle(
            &mut api,
            Request::SetStatus {
                id: "0".into(),
                status: "1".into(),
            },
        );
        assert_eq!(api.library().get_book(0).unwrap().status(), Status::Issued);
    }

    #[test]
    fn scripted_session_adds_and_lists() {
        let mut api = api();
        let out = run_script(&mut api, "1\nDune\nFrank Herbert\n1965\n4\n6\n");

        assert!(out.contains("Book added (ID 2): Dune"));
        assert!(out.contains("Title: Dune\nAuthor: Frank Herbert\nYear: 1965"));
        assert_eq!(api.library().len(), 3);
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let mut api = api();
        let out = run_script(&mut api, "2\nabc\n9\n1\n\nX\n1900\n3\n\nAuthor2\n\n6\n");

        assert!(out.contains("Invalid ID: abc"));
        assert!(out.contains("No such command: 9"));
        assert!(out.contains("Title and author must not be empty"));
        assert!(out.contains("Found 1 book(s)."));
        assert!(out.contains("Title: Book2"));
    }

    #[test]
    fn clearing_the_screen_never_interrupts_the_session() {
        colored::control::set_override(false);
        let mut api = api();
        let mut output = Vec::new();
        Session::new(Cursor::new("4\n6\n".to_string()), &mut output, Locale::En)
            .with_clear_screen(true)
            .run(&mut api)
            .unwrap();
        assert!(String::from_utf8(output).unwrap().contains("Title: Book2"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut api = api();
        let out = run_script(&mut api, "1\nHalf a book\n");
        assert!(out.ends_with("Author: "));
        assert_eq!(api.library().len(), 2);
    }

    #[test]
    fn open_store_retries_with_new_path() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("books.json");
        let script = format!("{}\n", good.display());

        let mut output = Vec::new();
        let api = Session::new(Cursor::new(script), &mut output, Locale::En)
            .open_store(dir.path().join("books.txt"))
            .unwrap();

        assert!(api.is_some());
        assert!(good.exists());
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Unsupported file type"));
    }

    #[test]
    fn open_store_gives_up_on_empty_answer() {
        let dir = tempfile::tempdir().unwrap();
        let api = Session::new(Cursor::new("\n".to_string()), Vec::new(), Locale::En)
            .open_store(dir.path().join("books.txt"))
            .unwrap();
        assert!(api.is_none());
    }
}

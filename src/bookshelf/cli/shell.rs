use super::print::{print_books, print_error, print_messages};
use bookshelf::api::{CmdResult, LibraryApi};
use bookshelf::error::{Result, ShelfError};
use bookshelf::model::Year;
use bookshelf::store::BookStore;
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

const MENU: &str = "\
Menu:
1. Add book
2. Remove book
3. Search books
4. List all books
5. Update book status
6. Exit";

enum Flow {
    Continue,
    Exit,
}

/// The interactive menu loop. Reads one choice per line from `input` and
/// writes everything, prompts included, to `output`.
pub struct Shell<S: BookStore, R: BufRead, W: Write> {
    api: LibraryApi<S>,
    input: R,
    output: W,
}

impl<S: BookStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: LibraryApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Run until "6" or end of input. Lookup, validation and input errors are
    /// printed and the menu comes back; storage errors end the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };
            debug!("Menu choice {:?}", choice);

            let outcome = match choice.trim() {
                "1" => self.add(),
                "2" => self.remove(),
                "3" => self.search(),
                "4" => self.list(),
                "5" => self.update_status(),
                "6" => Ok(Flow::Exit),
                _ => {
                    writeln!(self.output, "{}", "Invalid choice. Please try again.".red())?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => print_error(&mut self.output, &e)?,
                Err(e) => return Err(e),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt("Enter year: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.add_book(title, author, Year::Text(year))?;
        self.show(&result)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter the ID of the book to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.remove_book(id)?;
        self.show(&result)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Enter search query (title, author, year): ")? else {
            return Ok(Flow::Exit);
        };
        let result = self.api.search_books(&query)?;
        self.show(&result)
    }

    fn list(&mut self) -> Result<Flow> {
        let result = self.api.list_books()?;
        self.show(&result)
    }

    fn update_status(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter the ID of the book: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(status) = self.prompt("Enter new status ('available' or 'checked-out'): ")?
        else {
            return Ok(Flow::Exit);
        };
        let result = self.api.update_status(id, status.trim())?;
        self.show(&result)
    }

    fn show(&mut self, result: &CmdResult) -> Result<Flow> {
        print_books(&mut self.output, &result.listed_books)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    /// Print `label` and read one line without its line ending.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_id(&mut self, label: &str) -> Result<Option<u64>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| ShelfError::InvalidInput(format!("'{}' is not a book ID.", raw.trim())))
    }

    #[cfg(test)]
    fn api(&self) -> &LibraryApi<S> {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::model::{Book, Status};
    use bookshelf::store::memory::InMemoryStore;
    use bookshelf::store::Snapshot;
    use std::io;

    /// Loads fine, refuses every write.
    struct ReadOnlyStore;

    impl BookStore for ReadOnlyStore {
        fn load(&self) -> Result<Snapshot> {
            Ok(Snapshot::Fresh)
        }

        fn save(&mut self, _books: &[Book]) -> Result<()> {
            Err(ShelfError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn run_script(script: &str) -> (String, Vec<Book>) {
        run_script_on(InMemoryStore::new(), script)
    }

    fn run_script_on(store: InMemoryStore, script: &str) -> (String, Vec<Book>) {
        colored::control::set_override(false);
        let api = LibraryApi::open(store).unwrap();
        let mut output = Vec::new();
        let mut shell = Shell::new(api, script.as_bytes(), &mut output);
        shell.run().unwrap();
        let books = shell.api().books().to_vec();
        drop(shell);
        (String::from_utf8(output).unwrap(), books)
    }

    #[test]
    fn adds_a_book_from_prompts() {
        let (out, books) = run_script("1\nDune\nFrank Herbert\n1965\n6\n");

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].year, Year::Text("1965".into()));
        assert_eq!(books[0].status, Status::Available);
        assert!(out.contains("Book added (ID 1): Dune"));
    }

    #[test]
    fn keeps_free_text_verbatim() {
        let (_, books) = run_script("1\n  Padded Title \nAnon\ncirca 1900\n6\n");
        assert_eq!(books[0].title, "  Padded Title ");
        assert_eq!(books[0].year, Year::Text("circa 1900".into()));
    }

    #[test]
    fn lists_books_or_reports_empty() {
        let (out, _) = run_script("4\n1\nDune\nFrank Herbert\n1965\n4\n6\n");
        assert!(out.contains("The library is empty."));
        assert!(out.contains("   1. Dune"));
    }

    #[test]
    fn searches_case_insensitively() {
        let (out, _) = run_script("1\nFoundation\nIsaac Asimov\n1951\n3\nasimov\n3\nTolkien\n6\n");
        assert!(out.contains("   1. Foundation"));
        assert!(out.contains("No books found."));
    }

    #[test]
    fn removing_unknown_id_reports_and_continues() {
        let (out, books) = run_script("1\nDune\nF\n1965\n2\n7\n4\n6\n");
        assert!(out.contains("Book with ID 7 not found."));
        assert_eq!(books.len(), 1);
        assert!(out.contains("   1. Dune"));
    }

    #[test]
    fn non_numeric_id_is_recoverable() {
        let (out, books) = run_script("1\nDune\nF\n1965\n2\nabc\n5\none\n4\n6\n");
        assert!(out.contains("Invalid input: 'abc' is not a book ID."));
        assert!(out.contains("Invalid input: 'one' is not a book ID."));
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn updates_status_and_rejects_unknown_values() {
        let (out, books) =
            run_script("1\nDune\nF\n1965\n5\n1\nchecked-out\n5\n1\nlost\n6\n");
        assert!(out.contains("Status updated (ID 1): Dune is now checked-out"));
        assert!(out.contains("Invalid status 'lost'."));
        assert_eq!(books[0].status, Status::CheckedOut);
    }

    #[test]
    fn unknown_choice_redisplays_menu() {
        let (out, _) = run_script("9\n6\n");
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("6. Exit").count(), 2);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, books) = run_script("1\nDune\n");
        assert!(books.is_empty());
        assert!(out.contains("Enter author: "));
    }

    #[test]
    fn persists_every_mutation() {
        let api_store = InMemoryStore::new();
        colored::control::set_override(false);
        let api = LibraryApi::open(api_store).unwrap();
        let mut output = Vec::new();
        let mut shell = Shell::new(
            api,
            "1\nA\nB\n1\n1\nC\nD\n2\n5\n2\nchecked-out\n2\n1\n6\n".as_bytes(),
            &mut output,
        );
        shell.run().unwrap();

        let store = shell.api().store();
        assert_eq!(store.save_count(), 4);
        let saved = store.saved_books().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "C");
        assert_eq!(saved[0].status, Status::CheckedOut);
    }

    #[test]
    fn corrupt_store_starts_empty_without_message() {
        let (out, books) = run_script_on(InMemoryStore::corrupt("trailing comma"), "4\n6\n");
        assert!(books.is_empty());
        assert!(out.contains("The library is empty."));
        assert!(!out.contains("trailing comma"));
    }

    #[test]
    fn failed_save_ends_the_session() {
        colored::control::set_override(false);
        let api = LibraryApi::open(ReadOnlyStore).unwrap();
        let mut output = Vec::new();
        let script = "4\n1\nDune\nF\n1965\n4\n6\n";
        let mut shell = Shell::new(api, script.as_bytes(), &mut output);

        let err = shell.run().unwrap_err();
        drop(shell);

        assert!(matches!(err, ShelfError::Io(_)));
        assert!(!err.is_recoverable());
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("The library is empty."));
        assert!(!out.contains("Book added"));
        // no menu after the failed add
        assert_eq!(out.matches("6. Exit").count(), 2);
    }

    #[test]
    fn choice_ignores_surrounding_spaces() {
        let (out, books) = run_script(" 1 \nDune\nF\n1965\n6\n");
        assert_eq!(books.len(), 1);
        assert!(!out.contains("Invalid choice."));
    }
}

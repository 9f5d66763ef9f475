use std::io::Cursor;

use movie_search_db::{insert_category, insert_film, link_film_category, open_memory};
use movie_search_history::{MemoryStore, SearchHistory};

use super::*;

type TestSession = Session<MemoryStore, Cursor<Vec<u8>>, Vec<u8>>;

/// Catalog with 23 Action films from 2006, a Horror film from 1999 and a
/// Drama film from 2010.
fn catalog() -> Connection {
    let conn = open_memory().unwrap();
    insert_category(&conn, 1, "Action").unwrap();
    insert_category(&conn, 7, "Drama").unwrap();
    insert_category(&conn, 11, "Horror").unwrap();
    for i in 1..=23 {
        insert_film(&conn, i, &format!("ACTION FILM {i:02}"), Some(2006), Some("Fast")).unwrap();
        link_film_category(&conn, i, 1).unwrap();
    }
    insert_film(&conn, 100, "AFFAIR PREJUDICE", Some(1999), Some("A Fanciful Documentary")).unwrap();
    link_film_category(&conn, 100, 11).unwrap();
    insert_film(&conn, 101, "ACADEMY DINOSAUR", Some(2010), Some("A Epic Drama")).unwrap();
    link_film_category(&conn, 101, 7).unwrap();
    conn
}

fn session(input: &str) -> TestSession {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    Session::new(catalog(), SearchHistory::new(MemoryStore::new()), console, 10)
}

/// Run a scripted session and return its output and logged labels.
fn run_script(input: &str) -> (String, Vec<String>) {
    let mut s = session(input);
    s.run().unwrap();
    let (history, console) = s.close();
    let out = String::from_utf8(console.into_output()).unwrap();
    let labels = history
        .store()
        .documents()
        .iter()
        .map(|d| d["query"].as_str().unwrap().to_string())
        .collect();
    (out, labels)
}

#[test]
fn menu_choice_parsing() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Title));
    assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::GenreYear));
    assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("8"), None);
    assert_eq!(MenuChoice::parse("exit"), None);
}

#[test]
fn exit_prints_banner_and_goodbye() {
    let (out, labels) = run_script("7\n");
    assert!(out.contains("Welcome to our new Movie Search App!"));
    assert!(out.contains("Enter 7 - if you want to EXIT."));
    assert!(out.trim_end().ends_with("Goodbye!  See you later!"));
    assert!(labels.is_empty());
}

#[test]
fn end_of_input_at_menu_exits() {
    let (out, _) = run_script("");
    assert!(out.contains("Goodbye!  See you later!"));
}

#[test]
fn invalid_menu_choice_reprompts() {
    let (out, _) = run_script("9\nabc\n7\n");
    assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
    assert_eq!(out.matches("Your Choice: ").count(), 3);
}

#[test]
fn title_search_logs_and_displays() {
    let (out, labels) = run_script("1\nACADEMY\n7\n");
    assert!(out.contains("1. ACADEMY DINOSAUR (2010),\nDescription: 'A Epic Drama'"));
    assert_eq!(labels, vec!["ACADEMY"]);
}

#[test]
fn title_search_without_results_is_logged_and_returns() {
    let (out, labels) = run_script("1\nNOTHING HERE\n7\n");
    assert!(out.contains("No movies found."));
    assert_eq!(labels, vec!["NOTHING HERE"]);
    // Back at the menu, not re-prompting for a title.
    assert_eq!(out.matches("Enter movie title or keyword: ").count(), 1);
}

#[test]
fn genre_search_shows_genre_rows() {
    let (out, labels) = run_script("2\n11\n7\n");
    assert!(out.contains("1. AFFAIR PREJUDICE (1999), Genre: Horror"));
    assert_eq!(labels, vec!["Horror"]);
}

#[test]
fn genre_search_retries_bad_numbers_without_logging_them() {
    let (out, labels) = run_script("2\nfoo\n42\n7\n7\n");
    assert!(out.contains("Invalid input! Enter a number."));
    assert!(out.contains("Enter a number between 1 and 16."));
    assert!(out.contains("1. ACADEMY DINOSAUR (2010), Genre: Drama"));
    assert_eq!(labels, vec!["Drama"]);
}

#[test]
fn genre_without_films_reports_no_results() {
    let (out, labels) = run_script("2\n15\n7\n");
    assert!(out.contains("No movies found."));
    assert_eq!(labels, vec!["Travel"]);
}

#[test]
fn year_range_search_pages_results() {
    // Scenario: 23 films, pages of 10, 10, 3.
    let (out, labels) = run_script("3\n2006-2008\ny\ny\n7\n");
    assert_eq!(labels, vec!["2006-2008"]);
    assert_eq!(out.matches("Show more? (y/n): ").count(), 2);
    assert!(out.contains("23. ACTION FILM 23 (2006)"));
}

#[test]
fn rejected_year_is_not_logged() {
    let (out, labels) = run_script("3\n2030\n1999\n7\n");
    assert!(out.contains("Year must be between 1990 and 2025!"));
    assert!(out.contains("1. AFFAIR PREJUDICE (1999),"));
    assert_eq!(labels, vec!["1999"]);
}

#[test]
fn year_validation_messages_are_shown() {
    let (out, _) = run_script("3\n2006-\n2008-2006\n1989-2000\n06\n1999\n7\n");
    assert!(out.contains("Invalid format! Use YYYY-YYYY."));
    assert!(out.contains("Start year must be less than or equal to end year!"));
    assert!(out.contains("Years must be between 1990 and 2025!"));
    assert!(out.contains("Invalid format! Enter a 4-digit year (YYYY)."));
}

#[test]
fn empty_year_result_reprompts_and_logs_each_attempt() {
    let (out, labels) = run_script("3\n1995\n2010\n7\n");
    assert_eq!(out.matches("No movies found.").count(), 1);
    assert!(out.contains("1. ACADEMY DINOSAUR (2010),"));
    assert_eq!(labels, vec!["1995", "2010"]);
}

#[test]
fn year_loop_ends_at_end_of_input() {
    let (out, labels) = run_script("3\n1995\n");
    assert!(out.contains("No movies found."));
    assert!(out.contains("Goodbye!  See you later!"));
    assert_eq!(labels, vec!["1995"]);
}

#[test]
fn genre_and_year_search_uses_composed_label() {
    let (out, labels) = run_script("4\n11\n1999\n7\n");
    assert!(out.contains("1. AFFAIR PREJUDICE (1999), Genre: Horror"));
    assert_eq!(labels, vec!["Horror, 1999"]);
}

#[test]
fn logged_year_labels_are_normalized() {
    let (out, labels) = run_script("3\n 02006-2008 \nn\n4\n11\n1999 \n7\n");
    assert!(out.contains("1. ACTION FILM 01 (2006),"));
    assert!(out.contains("1. AFFAIR PREJUDICE (1999), Genre: Horror"));
    assert_eq!(labels, vec!["2006-2008", "Horror, 1999"]);
}

#[test]
fn genre_and_year_mismatch_reprompts_for_year() {
    let (out, labels) = run_script("4\n11\n2006\n1990-2000\n7\n");
    assert!(out.contains("No movies found."));
    assert!(out.contains("AFFAIR PREJUDICE"));
    assert!(!out.contains("ACTION FILM"));
    assert_eq!(labels, vec!["Horror, 2006", "Horror, 1990-2000"]);
}

#[test]
fn history_views_reflect_logged_searches() {
    let (out, _) = run_script("2\n11\n2\n11\n1\nACADEMY\n5\n6\n7\n");

    let top_start = out.find("------ Top 5 Queries by Frequency ------").unwrap();
    let recent_start = out.find("------ Last 5 Queries -------").unwrap();
    let top = &out[top_start..recent_start];
    let recent = &out[recent_start..];

    assert!(top.contains("'Horror' - 2 times"));
    assert!(top.contains("'ACADEMY' - 1 times"));
    assert!(top.find("'Horror'").unwrap() < top.find("'ACADEMY'").unwrap());

    assert_eq!(recent.matches(": 'Horror'").count(), 2);
    assert!(recent.find(": 'ACADEMY'").unwrap() < recent.find(": 'Horror'").unwrap());
}

#[test]
fn history_views_on_empty_history() {
    let (out, _) = run_script("5\n6\n7\n");
    assert_eq!(out.matches("No searches recorded yet.").count(), 2);
}

#[test]
fn page_size_is_configurable() {
    let console = Console::new(Cursor::new(b"3\n2006\nn\n7\n".to_vec()), Vec::new());
    let mut s = Session::new(catalog(), SearchHistory::new(MemoryStore::new()), console, 5);
    s.run().unwrap();
    let (_, console) = s.close();
    let out = String::from_utf8(console.into_output()).unwrap();
    assert!(out.contains("5. ACTION FILM 05"));
    assert!(!out.contains("6. ACTION FILM 06"));
}

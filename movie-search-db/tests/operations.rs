use movie_search_db::*;

#[test]
fn insert_and_link() {
    let conn = open_memory().unwrap();
    insert_film(&conn, 1, "ACADEMY DINOSAUR", Some(2006), Some("An epic drama")).unwrap();
    insert_category(&conn, 7, "Drama").unwrap();
    link_film_category(&conn, 1, 7).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM film_category", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn linking_twice_is_a_no_op() {
    let conn = open_memory().unwrap();
    insert_film(&conn, 1, "ACADEMY DINOSAUR", Some(2006), None).unwrap();
    insert_category(&conn, 7, "Drama").unwrap();
    link_film_category(&conn, 1, 7).unwrap();
    link_film_category(&conn, 1, 7).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM film_category", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn link_unknown_film_fails() {
    let conn = open_memory().unwrap();
    insert_category(&conn, 7, "Drama").unwrap();
    let err = link_film_category(&conn, 42, 7).unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound { ref entity_type, id: 42 } if entity_type == "film"
    ));
}

#[test]
fn link_unknown_category_fails() {
    let conn = open_memory().unwrap();
    insert_film(&conn, 1, "ACADEMY DINOSAUR", Some(2006), None).unwrap();
    let err = link_film_category(&conn, 1, 99).unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound { ref entity_type, id: 99 } if entity_type == "category"
    ));
}

#[test]
fn duplicate_film_id_fails() {
    let conn = open_memory().unwrap();
    insert_film(&conn, 1, "ACADEMY DINOSAUR", Some(2006), None).unwrap();
    let err = insert_film(&conn, 1, "ACE GOLDFINGER", Some(2006), None).unwrap_err();
    assert!(matches!(err, OperationError::Sqlite(_)));
}

//! Interactive shell sessions driven from in-memory input

use library_catalog::{
    cli::{OutputFormat, Shell},
    repository::seed,
    services::Services,
};

fn session(script: &str, format: OutputFormat) -> String {
    let mut shell = Shell::new(Services::new(seed::seeded()), Vec::new(), format);
    shell.run(script.as_bytes()).expect("shell I/O");
    String::from_utf8(shell.into_inner()).expect("utf-8 output")
}

#[test]
fn test_librarian_session() {
    let out = session(
        "rent B001 Alice\n\
         rent B001 Bob\n\
         list rented\n\
         return B001\n\
         stats\n",
        OutputFormat::Text,
    );

    assert!(out.contains("Орендовано: B001 → Alice"));
    assert!(out.contains("Помилка: Item B001 is already rented by Alice"));
    assert!(out.contains("B001 | Книга"));
    assert!(out.contains("(1 елементів)"));
    assert!(out.contains("Повернуто: B001 (орендував Alice)"));
    assert!(out.contains("Орендовано: 0\nДоступно: 7\n"));
}

#[test]
fn test_add_edit_remove() {
    let out = session(
        "add dvd D003 \"Тіні забутих предків\" 1965 \"Сергій Параджанов\" 97\n\
         add book D003 Дубль 2000 Хтось 10\n\
         edit D003 \"Тіні забутих предків\" 1965 \"С. Параджанов\" 97\n\
         search параджанов\n\
         remove D003\n\
         show D003\n",
        OutputFormat::Text,
    );

    assert!(out.contains("Додано: D003 \"Тіні забутих предків\""));
    assert!(out.contains("Помилка: Item with id D003 already exists"));
    assert!(out.contains("Оновлено: D003"));
    assert!(out.contains("Режисер: С. Параджанов, Тривалість: 97 хв"));
    assert!(out.contains("Видалено: D003"));
    assert!(out.contains("Помилка: Item D003 not found"));
}

#[test]
fn test_validation_messages() {
    let out = session("add magazine M009 Time 2024 many \"Time USA\"\n", OutputFormat::Text);
    assert!(out.contains("Помилка: Issue number must be a whole number, got 'many'"));
}

#[test]
fn test_json_output() {
    let out = session("rent D002 Alice\n", OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["id"], "D002");
    assert_eq!(value["rental"]["rented_by"], "Alice");

    let out = session("return D002\n", OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["code"], 22);
    assert_eq!(value["error"], "ItemNotBorrowed");

    let out = session("stats\n", OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["total"], 7);
    assert_eq!(value["most_common_year"], 2023);
}

#[test]
fn test_filter_labels() {
    let out = session("filter Журнали\n", OutputFormat::Text);
    assert!(out.contains("M001"));
    assert!(out.contains("M002"));
    assert!(!out.contains("B001"));
    assert!(out.contains("(2 елементів)"));
}

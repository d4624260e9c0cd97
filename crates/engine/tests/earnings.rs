use chrono::NaiveDate;

use engine::{
    EarningId, EditState, EngineError, FixedClock, MoneyCents, PageSize, Reconciled,
    SequentialIds, Session, SortDir, SortKey,
};

fn session() -> Session {
    Session::builder()
        .clock(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()))
        .ids(SequentialIds::default())
        .build()
}

fn fill(session: &mut Session, amount: &str, date: &str, note: &str) {
    let form = session.form_mut();
    form.amount = amount.to_string();
    form.date = date.to_string();
    form.note = note.to_string();
}

fn add(session: &mut Session, amount: &str, date: &str) -> EarningId {
    fill(session, amount, date, "");
    assert_eq!(session.submit().unwrap(), Reconciled::Inserted);
    session.ledger().entries()[0].id
}

fn page_dates(session: &Session) -> Vec<String> {
    session
        .page()
        .items
        .iter()
        .map(|e| e.date.clone())
        .collect()
}

#[test]
fn add_edit_delete_scenario() {
    let mut session = session();
    assert!(session.ledger().is_empty());

    let first = add(&mut session, "1200", "2024-01-05");
    assert_eq!(session.total().to_string(), "1200.00");

    add(&mut session, "850", "2024-01-06");
    assert_eq!(page_dates(&session), vec!["2024-01-06", "2024-01-05"]);
    assert_eq!(session.total().to_string(), "2050.00");

    session.begin_edit(first).unwrap();
    session.form_mut().amount = "300".to_string();
    assert_eq!(session.submit().unwrap(), Reconciled::Updated);
    assert_eq!(session.total().to_string(), "1150.00");
    assert_eq!(session.ledger().entries()[1].id, first);
    assert_eq!(page_dates(&session), vec!["2024-01-06", "2024-01-05"]);
    assert_eq!(session.edit_state(), &EditState::Idle);

    session.delete(first).unwrap();
    assert_eq!(session.total().to_string(), "850.00");
    assert_eq!(session.page().items.len(), 1);
}

#[test]
fn pagination_scenario() {
    let mut session = session();
    let ids: Vec<EarningId> = (1..=12)
        .map(|day| add(&mut session, "10", &format!("2024-01-{day:02}")))
        .collect();
    assert_eq!(session.view().page_size(), PageSize::Five);

    let page = session.page();
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 12);
    assert_eq!(
        page_dates(&session),
        vec!["2024-01-12", "2024-01-11", "2024-01-10", "2024-01-09", "2024-01-08"]
    );

    session.next_page();
    session.next_page();
    assert_eq!(session.page().page, 3);
    assert_eq!(page_dates(&session), vec!["2024-01-02", "2024-01-01"]);

    for id in ids.iter().take(8) {
        session.delete(*id).unwrap();
    }
    let page = session.page();
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 4);
}

#[test]
fn invalid_amounts_never_touch_the_ledger() {
    let mut session = session();
    add(&mut session, "5", "2024-01-01");
    let before = session.ledger().clone();

    for input in ["", "abc", "0", "-12", "0.00", "NaN", "inf", "0.001"] {
        fill(&mut session, input, "2024-01-02", "note");
        assert!(matches!(
            session.submit(),
            Err(EngineError::InvalidAmount(_))
        ));
        assert_eq!(session.ledger(), &before);
    }
}

#[test]
fn each_add_prepends_exactly_one_fresh_record() {
    let mut session = session();
    let mut seen = Vec::new();
    for n in 1..=6 {
        let id = add(&mut session, &n.to_string(), "2024-01-01");
        assert!(!seen.contains(&id));
        seen.push(id);
        assert_eq!(session.ledger().len(), n);
        assert_eq!(session.ledger().entries()[0].id, id);
    }
}

#[test]
fn save_while_editing_replaces_in_place() {
    let mut session = session();
    let a = add(&mut session, "1", "2024-01-01");
    let b = add(&mut session, "2", "2024-01-02");
    let c = add(&mut session, "3", "2024-01-03");

    session.begin_edit(b).unwrap();
    fill(&mut session, "20", "2023-12-31", "  moved  ");
    session.submit().unwrap();

    let canonical: Vec<EarningId> = session.ledger().entries().iter().map(|e| e.id).collect();
    assert_eq!(canonical, vec![c, b, a]);
    let edited = session.ledger().get(b).unwrap();
    assert_eq!(edited.amount, MoneyCents::new(2000));
    assert_eq!(edited.date, "2023-12-31");
    assert_eq!(edited.note(), Some("moved"));
}

#[test]
fn total_matches_sum_after_mixed_operations() {
    let mut session = session();
    let a = add(&mut session, "10.10", "2024-01-01");
    let b = add(&mut session, "20.20", "2024-01-02");
    add(&mut session, "0.70", "2024-01-03");
    session.begin_edit(a).unwrap();
    session.form_mut().amount = "1,05".to_string();
    session.submit().unwrap();
    session.delete(b).unwrap();

    let expected: i64 = session
        .ledger()
        .entries()
        .iter()
        .map(|e| e.amount.cents())
        .sum();
    assert_eq!(session.total().cents(), expected);
    assert_eq!(session.total().to_string(), "1.75");
}

#[test]
fn total_covers_the_full_ledger_not_the_page() {
    let mut session = session();
    for day in 1..=7 {
        add(&mut session, "1", &format!("2024-01-{day:02}"));
    }
    session.next_page();
    assert_eq!(session.page().items.len(), 2);
    assert_eq!(session.total().to_string(), "7.00");
}

#[test]
fn sorting_by_amount_and_back() {
    let mut session = session();
    add(&mut session, "30", "2024-01-01");
    add(&mut session, "10", "2024-01-03");
    add(&mut session, "20", "2024-01-02");

    session.toggle_sort(SortKey::Amount);
    assert_eq!(session.view().sort().dir, SortDir::Desc);
    let amounts: Vec<String> = session.page().items.iter().map(|e| e.amount.to_string()).collect();
    assert_eq!(amounts, vec!["30.00", "20.00", "10.00"]);

    session.toggle_sort(SortKey::Amount);
    assert_eq!(session.view().sort().dir, SortDir::Asc);
    let amounts: Vec<String> = session.page().items.iter().map(|e| e.amount.to_string()).collect();
    assert_eq!(amounts, vec!["10.00", "20.00", "30.00"]);

    session.toggle_sort(SortKey::Date);
    assert_eq!(session.view().sort().dir, SortDir::Desc);
    assert_eq!(
        page_dates(&session),
        vec!["2024-01-03", "2024-01-02", "2024-01-01"]
    );
}

#[test]
fn current_page_stays_in_range_after_any_mutation() {
    let mut session = session();
    let mut ids = Vec::new();
    for day in 1..=23 {
        ids.push(add(&mut session, "1", &format!("2024-02-{:02}", day % 28 + 1)));
        session.next_page();
        let page = session.page();
        assert!(page.page >= 1 && page.page <= page.total_pages);
    }

    session.set_page_size(PageSize::Ten);
    session.next_page();
    session.next_page();
    while let Some(id) = ids.pop() {
        session.delete(id).unwrap();
        let page = session.page();
        assert!(page.page >= 1 && page.page <= page.total_pages);
        assert_eq!(page.total_pages, page.total_items.div_ceil(10).max(1));
    }
}

#![forbid(unsafe_code)]
use chrono::NaiveDate;
use escala::{
    Assignment, Role, RoleRenderer, Schedule, ScheduleGenerator, ScheduleRenderer, ServiceDay,
    TextRenderer,
};

fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, day)
}

fn dated_week() -> Schedule {
    Schedule::from(vec![
        Assignment::new("Ana", Role::Primary, ServiceDay::Saturday, d(2026, 1, 3)),
        Assignment::new("Rui", Role::Secondary, ServiceDay::Saturday, d(2026, 1, 3)),
        Assignment::new("Ana", Role::Secondary, ServiceDay::Saturday, d(2026, 1, 3)),
        Assignment::new("Ana", Role::Primary, ServiceDay::Sunday, d(2026, 1, 4)),
        Assignment::new("Ana", Role::Primary, ServiceDay::Wednesday, d(2026, 1, 7)),
    ])
}

#[test]
fn dated_schedule_is_grouped_by_date() {
    insta::assert_snapshot!(TextRenderer.render(&dated_week()), @r"
    03/01/2026 (SABADO):
      - Ana (chave)
      - Rui (oferta)
      - Ana (oferta)

    04/01/2026 (DOMINGO):
      - Ana (chave)

    07/01/2026 (QUARTA):
      - Ana (chave)
    ");
}

#[test]
fn undated_schedule_is_grouped_by_day() {
    let schedule = Schedule::from(vec![
        Assignment::new("Ana", Role::Primary, ServiceDay::Sunday, None),
        Assignment::new("Rui", Role::Secondary, ServiceDay::Sunday, None),
        Assignment::new("Eva", Role::Primary, ServiceDay::Saturday, None),
    ]);
    let out = TextRenderer.render(&schedule);
    assert_eq!(
        out,
        "DOMINGO:\n  - Ana (chave)\n  - Rui (oferta)\n\nSABADO:\n  - Eva (chave)"
    );
    assert!(!out.contains("QUARTA"));
}

#[test]
fn role_view_lists_chave_then_oferta() {
    insta::assert_snapshot!(RoleRenderer.render(&dated_week()), @r"
    CHAVE:
      - Ana (SABADO, 03/01/2026)
      - Ana (DOMINGO, 04/01/2026)
      - Ana (QUARTA, 07/01/2026)

    OFERTA:
      - Rui (SABADO, 03/01/2026)
      - Ana (SABADO, 03/01/2026)
    ");
}

#[test]
fn generator_display_of_weekly_schedule() {
    let roster = ["João", "Maria", "Pedro", "Ana", "Carlos", "Julia"];
    let mut generator = ScheduleGenerator::new(&roster, Some(444)).unwrap();
    generator.generate_weekly_schedule(false).unwrap();
    let out = generator.display();
    assert!(out.contains("DOMINGO"));
    assert!(out.contains("QUARTA"));
    assert!(out.contains("SABADO"));
    assert!(out.contains("(chave)"));
    assert!(out.contains("(oferta)"));
}

#[test]
fn generator_display_of_annual_schedule_starts_with_first_date() {
    let mut generator = ScheduleGenerator::new(&["A", "B", "C"], Some(42)).unwrap();
    generator.generate_annual_schedule(2026).unwrap();
    let out = generator.display();
    assert!(out.starts_with("03/01/2026 (SABADO):"));
    // 31/12/2026 est un jeudi : la dernière date est la quarta 30/12
    assert!(out.contains("30/12/2026 (QUARTA):"));
    assert!(!out.contains("31/12/2026"));
}

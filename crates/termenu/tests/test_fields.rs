use pretty_assertions::assert_eq;
use termenu::{
    Result,
    event::KeyCode,
    testing,
    widgets::{FieldOutcome, InputField, Validator, input::input_box},
};

#[test]
fn numeric_field_drops_letters_and_stops_at_max() -> Result<()> {
    let field = InputField::new("Age", 3).with_validator(Validator::Numeric);
    let mut keys = testing::typed("1a23");
    keys.push(KeyCode::Enter.into());
    let (_, mut screen) = testing::screen(40, 10, keys)?;
    let before = screen.snapshot();
    assert_eq!(input_box(&mut screen, &field)?, FieldOutcome::Committed("123".into()));
    assert_eq!(screen.depth(), 0);
    assert_eq!(screen.snapshot().line(4), before.line(4));
    Ok(())
}

#[test]
fn escape_is_not_an_empty_commit() -> Result<()> {
    let field = InputField::new("Name", 10);
    let mut keys = testing::typed("ab");
    keys.push(KeyCode::Esc.into());
    let (_, mut screen) = testing::screen(40, 10, keys)?;
    let cancelled = input_box(&mut screen, &field)?;
    assert_eq!(cancelled, FieldOutcome::Cancelled);
    assert!(!cancelled.is_committed());

    let (_, mut screen) = testing::screen(40, 10, [KeyCode::Enter.into()])?;
    let empty = input_box(&mut screen, &field)?;
    assert_eq!(empty, FieldOutcome::Committed(String::new()));
    assert_ne!(cancelled, empty);
    Ok(())
}

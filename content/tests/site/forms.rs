use content::{FormBuffer, FormError, FormKind, FormStatus};

#[test]
fn contact_without_name_does_not_submit() {
    let mut form = FormBuffer::new(FormKind::Contact);
    form.set("email", "a@b.com").unwrap();

    assert_eq!(form.submit(), Err(FormError::MissingField("name")));
    assert_eq!(form.status(), FormStatus::Editing);
    assert_eq!(form.get("email"), "a@b.com");
}

#[test]
fn contact_without_email_does_not_submit() {
    let mut form = FormBuffer::new(FormKind::Contact);
    form.set("name", "Alex").unwrap();
    assert_eq!(form.submit(), Err(FormError::MissingField("email")));
    assert!(!form.is_submitted());
}

#[test]
fn contact_submits_and_clears_after_expiry() -> anyhow::Result<()> {
    let mut form = FormBuffer::new(FormKind::Contact);
    form.set("name", "Alex")?;
    form.set("email", "a@b.com")?;
    form.set("travelStyle", "Backpacking")?;

    let ticket = form.submit()?;
    assert_eq!(form.status(), FormStatus::Submitted(ticket));
    // values stay visible until the reset fires
    assert_eq!(form.get("name"), "Alex");

    assert!(form.expire(ticket));
    assert_eq!(form.status(), FormStatus::Editing);
    for field in FormKind::Contact.fields() {
        assert_eq!(form.get(field), "", "{field} should be cleared");
    }
    Ok(())
}

#[test]
fn resubmitting_while_submitted_is_rejected() -> anyhow::Result<()> {
    let mut form = FormBuffer::new(FormKind::Newsletter);
    form.set("email", "a@b.com")?;
    form.submit()?;
    assert_eq!(form.submit(), Err(FormError::AlreadySubmitted));
    Ok(())
}

#[test]
fn stale_ticket_is_ignored() -> anyhow::Result<()> {
    let mut form = FormBuffer::new(FormKind::Newsletter);
    form.set("email", "first@b.com")?;
    let first = form.submit()?;
    assert!(form.expire(first));

    form.set("email", "second@b.com")?;
    let second = form.submit()?;
    assert_ne!(first, second);

    // the first submission's timer firing late must not touch the second
    assert!(!form.expire(first));
    assert_eq!(form.status(), FormStatus::Submitted(second));
    assert_eq!(form.get("email"), "second@b.com");

    assert!(form.expire(second));
    assert!(!form.expire(second));
    Ok(())
}

#[test]
fn newsletter_requires_email() {
    let mut form = FormBuffer::new(FormKind::Newsletter);
    assert_eq!(form.submit(), Err(FormError::MissingField("email")));
}

#[test]
fn unknown_fields_are_rejected() {
    let mut form = FormBuffer::new(FormKind::Newsletter);
    assert_eq!(
        form.set("name", "Alex"),
        Err(FormError::UnknownField("name".to_string()))
    );
    assert_eq!(form.get("name"), "");
}

#[test]
fn last_write_wins() -> anyhow::Result<()> {
    let mut form = FormBuffer::new(FormKind::Contact);
    form.set("destination", "Europe")?;
    form.set("destination", "Japan")?;
    assert_eq!(form.get("destination"), "Japan");
    Ok(())
}

#[test]
fn submission_snapshot_serializes() -> anyhow::Result<()> {
    let mut form = FormBuffer::new(FormKind::Newsletter);
    form.set("email", "a@b.com")?;
    let json = serde_json::to_string(&form.submission())?;
    assert_eq!(json, r#"{"kind":"Newsletter","fields":{"email":"a@b.com"}}"#);
    Ok(())
}

#[test]
fn reset_delays() {
    assert_eq!(FormKind::Contact.reset_delay().as_millis(), 3000);
    assert_eq!(FormKind::Newsletter.reset_delay().as_millis(), 5000);
}

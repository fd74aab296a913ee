mod common;

use anyhow::Result;
use serde_json::json;

use equip_ledger::filter::SortDirection;
use equip_ledger::ledger::{Column, LedgerKind};
use equip_ledger::view::{LedgerView, ViewState};

#[tokio::test]
async fn returned_ledger_is_scoped_to_user() -> Result<()> {
    let server = common::FakeLedger::spawn(common::Fixture::default()).await?;
    let dir = tempfile::tempdir()?;
    common::logged_in(dir.path(), Some(common::TOKEN), Some("Nguyen Van A"))?;
    let mut client = common::client_for(&server.server_url, dir.path())?;

    let user_name = client.session().user_name().map(str::to_string);
    let mut view = LedgerView::new(LedgerKind::Returned);
    view.load(&mut client, user_name.as_deref()).await?;

    assert_eq!(view.rows().len(), 2);
    assert!(view.rows().iter().all(|r| r.person.trim() == "Nguyen Van A"));

    view.sort(Column::Date);
    let dates: Vec<_> = view.displayed().iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["15/01/2023", "01/02/2023"]);

    view.sort(Column::Date);
    assert_eq!(view.sort_state().direction_of(Column::Date), Some(SortDirection::Desc));
    assert_eq!(view.displayed()[0].date, "01/02/2023");

    view.search("ABC");
    assert_eq!(view.displayed().len(), 1);
    assert_eq!(view.displayed()[0].device, "Scanner abc");

    view.search("");
    assert_eq!(view.displayed().len(), 2);
    Ok(())
}

#[tokio::test]
async fn nested_borrowed_payload_is_unwrapped() -> Result<()> {
    let server = common::FakeLedger::spawn(common::Fixture::default()).await?;
    let dir = tempfile::tempdir()?;
    common::logged_in(dir.path(), Some(common::TOKEN), Some("Nguyen Van A"))?;
    let mut client = common::client_for(&server.server_url, dir.path())?;

    let mut view = LedgerView::new(LedgerKind::Borrowed);
    view.load(&mut client, Some("Nguyen Van A")).await?;
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.rows()[0].serial, "0901234567");
    assert_eq!(view.rows()[0].note, "");
    Ok(())
}

#[tokio::test]
async fn empty_data_is_no_data() -> Result<()> {
    let fixture = common::Fixture {
        returned: (axum::http::StatusCode::OK, json!({ "data": [] })),
        ..Default::default()
    };
    let server = common::FakeLedger::spawn(fixture).await?;
    let dir = tempfile::tempdir()?;
    common::logged_in(dir.path(), Some(common::TOKEN), Some("Nguyen Van A"))?;
    let mut client = common::client_for(&server.server_url, dir.path())?;

    let mut view = LedgerView::new(LedgerKind::Returned);
    view.load(&mut client, Some("Nguyen Van A")).await?;
    assert!(matches!(view.state(), ViewState::Loaded { .. }));
    assert!(view.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_user_name_shows_everything() -> Result<()> {
    let server = common::FakeLedger::spawn(common::Fixture::default()).await?;
    let dir = tempfile::tempdir()?;
    common::logged_in(dir.path(), Some(common::TOKEN), None)?;
    let mut client = common::client_for(&server.server_url, dir.path())?;

    let mut view = LedgerView::new(LedgerKind::Returned);
    view.load(&mut client, None).await?;
    assert_eq!(view.rows().len(), 3);
    Ok(())
}

#[tokio::test]
async fn expired_token_fails_the_view() -> Result<()> {
    let server = common::FakeLedger::spawn(common::Fixture::default()).await?;
    let dir = tempfile::tempdir()?;
    common::logged_in(dir.path(), Some("stale"), Some("Nguyen Van A"))?;
    let mut client = common::client_for(&server.server_url, dir.path())?;

    let mut view = LedgerView::new(LedgerKind::Returned);
    assert!(view.load(&mut client, Some("Nguyen Van A")).await.is_err());
    assert!(matches!(view.state(), ViewState::Failed(_)));
    assert!(client.session().require_login().is_err());
    Ok(())
}

#[tokio::test]
async fn non_json_body_fails_the_view_but_keeps_session() -> Result<()> {
    let fixture = common::Fixture {
        returned_raw: Some("<html><body>Sheet is being edited</body></html>"),
        ..Default::default()
    };
    let server = common::FakeLedger::spawn(fixture).await?;
    let dir = tempfile::tempdir()?;
    common::logged_in(dir.path(), Some(common::TOKEN), Some("Nguyen Van A"))?;
    let mut client = common::client_for(&server.server_url, dir.path())?;

    let mut view = LedgerView::new(LedgerKind::Returned);
    let err = view.load(&mut client, Some("Nguyen Van A")).await.unwrap_err();
    assert!(matches!(err, equip_ledger::ClientError::Http(_)), "got {err:?}");
    assert!(matches!(view.state(), ViewState::Failed(_)));

    // only a 401 or an unreachable server ends the session
    assert_eq!(client.session().token(), Some(common::TOKEN));
    assert_eq!(client.session().require_login()?, "a@example.com");
    Ok(())
}

use stepwise_application::{Action, AppController, AppState, Tab, reduce, view};
use stepwise_core::methodology::MethodologyCatalog;
use stepwise_core::session::SessionUpdate;

fn controller() -> AppController {
    AppController::new(MethodologyCatalog::builtin(), "4-step")
}

#[test]
fn five_whys_session_scenario() {
    let mut app = controller();
    app.dispatch(Action::SelectMethodology("5-whys".into()));
    app.dispatch(Action::StartSession);
    app.dispatch(Action::ToggleStepCompleted(1));
    app.dispatch(Action::ToggleStepCompleted(2));

    let store = app.state().store();
    let id = store.current().unwrap().id.clone();
    assert_eq!(store.progress(&id), 40.0);

    app.dispatch(Action::SaveSession);

    let history = app.state().store().history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, id);
    assert_eq!(
        history[0].completed_steps.iter().copied().collect::<Vec<_>>(),
        vec![1, 2]
    );

    let json = serde_json::to_value(&history[0]).unwrap();
    assert_eq!(json["completedSteps"], serde_json::json!([1, 2]));
}

#[test]
fn saving_twice_replaces_in_place() {
    let mut app = controller();
    app.dispatch(Action::StartSession);
    app.dispatch(Action::SaveSession);
    app.dispatch(Action::UpdateSession(SessionUpdate::title("Flaky test")));
    app.dispatch(Action::SaveSession);

    let history = app.state().store().history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].title, "Flaky test");

    app.dispatch(Action::StartSession);
    app.dispatch(Action::SaveSession);
    assert_eq!(app.state().store().history().len(), 2);
}

#[test]
fn action_item_lifecycle() {
    let mut app = controller();
    app.dispatch(Action::StartSession);

    app.dispatch(Action::AddActionItem {
        step: 2,
        text: "  ".into(),
    });
    assert!(app.state().store().current().unwrap().items(2).is_empty());

    app.dispatch(Action::AddActionItem {
        step: 2,
        text: "Fix config".into(),
    });
    let item = app.state().store().current().unwrap().items(2)[0].clone();
    assert_eq!(item.text, "Fix config");
    assert!(!item.completed);

    app.dispatch(Action::ToggleActionItem {
        step: 2,
        item_id: item.id.clone(),
    });
    assert!(app.state().store().current().unwrap().items(2)[0].completed);

    let before = app.state().store().current().unwrap().items(2).to_vec();
    app.dispatch(Action::DeleteActionItem {
        step: 2,
        item_id: "no-such-item".into(),
    });
    assert_eq!(app.state().store().current().unwrap().items(2), before.as_slice());

    app.dispatch(Action::DeleteActionItem {
        step: 2,
        item_id: item.id,
    });
    assert!(app.state().store().current().unwrap().items(2).is_empty());
}

#[test]
fn edits_before_any_session_change_nothing() {
    let initial = AppState::new(MethodologyCatalog::builtin(), "4-step");
    let edits = [
        Action::UpdateSession(SessionUpdate::title("x")),
        Action::SetStepNote {
            step: 1,
            note: "n".into(),
        },
        Action::ToggleStepCompleted(1),
        Action::AddActionItem {
            step: 1,
            text: "t".into(),
        },
        Action::SaveSession,
    ];
    let after = edits.iter().fold(initial.clone(), reduce);
    assert_eq!(after, initial);
}

#[test]
fn resumed_session_keeps_its_own_methodology() {
    let mut app = controller();
    app.dispatch(Action::SelectMethodology("pdca".into()));
    app.dispatch(Action::StartSession);
    app.dispatch(Action::ToggleStepCompleted(4));
    app.dispatch(Action::SaveSession);
    let saved_id = app.state().store().history()[0].id.clone();

    app.dispatch(Action::SwitchTab(Tab::Guide));
    app.dispatch(Action::SelectMethodology("first-principles".into()));
    app.dispatch(Action::StartSession);
    app.dispatch(Action::SwitchTab(Tab::History));
    app.dispatch(Action::OpenSaved(saved_id));

    let session_view = view::session(app.state()).unwrap();
    assert_eq!(app.state().active_tab(), Tab::Session);
    assert_eq!(session_view.methodology.id, "pdca");
    assert_eq!(session_view.progress, 25.0);
}

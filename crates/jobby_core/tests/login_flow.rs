use std::sync::Once;

use jobby_core::{
    update, AppState, Credential, Effect, LoginFailure, Msg, Password, Route, ScreenView,
    LOGIN_UNAVAILABLE_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobby_logging::initialize_for_tests);
}

fn anonymous_start() -> AppState {
    let (state, effects) = update(
        AppState::new(),
        Msg::Started {
            credential: None,
            path: "/".to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn fill_and_submit(state: AppState, username: &str, password: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UsernameChanged(username.to_string()));
    let (state, _) = update(state, Msg::PasswordChanged(Password::new(password)));
    update(state, Msg::LoginSubmitted)
}

fn login_error(state: &AppState) -> Option<String> {
    match state.view().screen {
        ScreenView::Login(login) => login.error,
        other => panic!("expected login screen, got {other:?}"),
    }
}

#[test]
fn protected_start_redirects_to_login() {
    init_logging();
    let state = anonymous_start();
    assert_eq!(state.route(), &Route::Login);
    assert!(state.view().header.is_none());
}

#[test]
fn submit_posts_entered_credentials() {
    init_logging();
    let (state, effects) = fill_and_submit(anonymous_start(), "rahul", "rahul@2021");

    assert_eq!(
        effects,
        vec![Effect::SubmitLogin {
            request: 1,
            view: 1,
            username: "rahul".to_string(),
            password: Password::new("rahul@2021"),
        }]
    );
    match state.view().screen {
        ScreenView::Login(login) => {
            assert!(login.submitting);
            assert_eq!(login.password_len, 10);
            assert_eq!(login.error, None);
        }
        other => panic!("expected login screen, got {other:?}"),
    }
}

#[test]
fn empty_submission_is_let_through() {
    init_logging();
    let (_state, effects) = update(anonymous_start(), Msg::LoginSubmitted);
    assert!(matches!(
        effects.as_slice(),
        [Effect::SubmitLogin { username, password, .. }] if username.is_empty() && password.expose().is_empty()
    ));
}

#[test]
fn second_submit_while_pending_is_ignored() {
    init_logging();
    let (state, _) = fill_and_submit(anonymous_start(), "rahul", "pw");
    let (_state, effects) = update(state, Msg::LoginSubmitted);
    assert!(effects.is_empty());
}

#[test]
fn successful_login_stores_token_and_replaces_history() {
    init_logging();
    let (state, _) = fill_and_submit(anonymous_start(), "rahul", "rahul@2021");
    let credential = Credential::new("jwt-abc");

    let (state, effects) = update(
        state,
        Msg::LoginFinished {
            request: 1,
            result: Ok(credential.clone()),
        },
    );

    assert_eq!(effects, vec![Effect::StoreCredential(credential.clone())]);
    assert_eq!(state.route(), &Route::Home);
    assert_eq!(state.session().credential(), Some(&credential));
    assert!(!state.view().can_go_back);
    assert_eq!(state.view().screen, ScreenView::Home);
}

#[test]
fn rejected_login_shows_server_message_verbatim() {
    init_logging();
    let (state, _) = fill_and_submit(anonymous_start(), "rahul", "wrong");
    let (mut state, effects) = update(
        state,
        Msg::LoginFinished {
            request: 1,
            result: Err(LoginFailure::Rejected(
                "username and password didn't match".to_string(),
            )),
        },
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.route(), &Route::Login);
    assert!(!state.session().is_authenticated());
    assert_eq!(
        login_error(&state).as_deref(),
        Some("username and password didn't match")
    );

    // The user can try again as often as they like; the previous error stays
    // on screen while the new attempt is pending.
    let (state, effects) = update(state, Msg::LoginSubmitted);
    assert_eq!(effects.len(), 1);
    match state.view().screen {
        ScreenView::Login(login) => {
            assert!(login.submitting);
            assert_eq!(
                login.error.as_deref(),
                Some("username and password didn't match")
            );
        }
        other => panic!("expected login screen, got {other:?}"),
    }

    let (state, _) = update(
        state,
        Msg::LoginFinished {
            request: 2,
            result: Err(LoginFailure::Unavailable),
        },
    );
    assert_eq!(
        login_error(&state).as_deref(),
        Some(LOGIN_UNAVAILABLE_MESSAGE)
    );
}

#[test]
fn unreachable_server_shows_generic_message() {
    init_logging();
    let (state, _) = fill_and_submit(anonymous_start(), "rahul", "pw");
    let (state, _) = update(
        state,
        Msg::LoginFinished {
            request: 1,
            result: Err(LoginFailure::Unavailable),
        },
    );
    assert_eq!(
        login_error(&state).as_deref(),
        Some(LOGIN_UNAVAILABLE_MESSAGE)
    );
}

#[test]
fn stale_login_completion_is_ignored() {
    init_logging();
    let (state, _) = fill_and_submit(anonymous_start(), "rahul", "pw");
    let before = state.clone();
    let (next, effects) = update(
        state,
        Msg::LoginFinished {
            request: 42,
            result: Ok(Credential::new("other")),
        },
    );
    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn signed_in_user_visiting_login_lands_home() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::Started {
            credential: Some(Credential::new("jwt")),
            path: "/login".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.route(), &Route::Home);
}

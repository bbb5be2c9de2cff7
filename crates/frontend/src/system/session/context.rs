use contracts::system::session::ActiveUser;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<ActiveUser>,
}

impl SessionState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(ActiveUser::is_admin)
    }
}

/// Session context provider component. The active user is restored from
/// localStorage on creation, so a reload keeps the session.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState {
        user: storage::load_active_user(),
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Perform login and persist the resulting session
pub async fn do_login(
    set_session: WriteSignal<SessionState>,
    username: String,
    password: String,
) -> Result<ActiveUser, String> {
    let response = api::login(username, password).await?;
    storage::save_active_user(&response.user);
    set_session.set(SessionState {
        user: Some(response.user.clone()),
    });
    Ok(response.user)
}

/// Register a new account and sign it in immediately
pub async fn do_register(
    set_session: WriteSignal<SessionState>,
    username: String,
    email: Option<String>,
    password: String,
) -> Result<ActiveUser, String> {
    let response = api::register(username, email, password).await?;
    storage::save_active_user(&response.user);
    set_session.set(SessionState {
        user: Some(response.user.clone()),
    });
    Ok(response.user)
}

/// Clear the session and its stored copy
pub fn do_logout(set_session: WriteSignal<SessionState>) {
    storage::clear_active_user();
    set_session.set(SessionState::default());
}

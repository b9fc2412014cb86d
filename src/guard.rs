use crate::route::Route;

/// Outcome of a guarded navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// Decides whether `to` may be shown given the session email, if any.
///
/// Logged in users are bounced from the login and account creation pages to
/// the question listing; logged out users only ever reach public routes.
pub fn check(to: &Route, session: Option<&str>) -> Navigation {
    let logged = session.is_some();

    match to.is_public() {
        true => match to {
            Route::Login {} | Route::CreateUser {} if logged => {
                Navigation::Redirect(Route::Questions {})
            }
            _ => Navigation::Proceed,
        },
        false => match logged {
            true => Navigation::Proceed,
            false => Navigation::Redirect(Route::Login {}),
        },
    }
}

use dioxus::prelude::*;

use crate::{
    components::{guard::Guard, navbar::NavBar},
    pages::{
        create_comment::CreateComment, create_question::CreateQuestion, create_user::CreateUser,
        edit_comment::EditComment, login::Login, logout::Logout, profile::Profile,
        question::Question, questions::Questions,
    },
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Guard)]
    #[layout(NavBar)]
        #[redirect("/", || Route::Questions {})]
        #[route("/login")]
        Login {},
        #[route("/createuser")]
        CreateUser {},
        #[route("/logout")]
        Logout {},
        #[route("/questions")]
        Questions {},
        #[route("/question/:id")]
        Question { id: i64 },
        #[route("/createquestion")]
        CreateQuestion {},
        #[route("/question/:id/comments")]
        CreateComment { id: i64 },
        #[route("/question/:questionid/comments/:id")]
        EditComment { questionid: i64, id: i64 },
        #[route("/profile/:email")]
        Profile { email: String },
}

impl Route {
    /// Routes reachable without a session. Everything else is guarded.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login {} | Route::CreateUser {})
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Login {} => "Login",
            Route::CreateUser {} => "CreateUser",
            Route::Logout {} => "Logout",
            Route::Questions {} => "Questions",
            Route::Question { .. } => "Question",
            Route::CreateQuestion {} => "CreateQuestion",
            Route::CreateComment { .. } => "CreateComment",
            Route::EditComment { .. } => "EditComment",
            Route::Profile { .. } => "Profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn paths_parse_to_routes() {
        let cases = [
            ("/login", Route::Login {}),
            ("/createuser", Route::CreateUser {}),
            ("/logout", Route::Logout {}),
            ("/questions", Route::Questions {}),
            ("/question/7", Route::Question { id: 7 }),
            ("/createquestion", Route::CreateQuestion {}),
            ("/question/7/comments", Route::CreateComment { id: 7 }),
            (
                "/question/7/comments/3",
                Route::EditComment {
                    questionid: 7,
                    id: 3,
                },
            ),
            (
                "/profile/ana",
                Route::Profile {
                    email: "ana".to_string(),
                },
            ),
        ];

        for (path, route) in cases {
            assert_eq!(Route::from_str(path).ok(), Some(route), "{path}");
        }
    }

    #[test]
    fn profile_paths_carry_emails() {
        let route = Route::Profile {
            email: "ana.l+x@example.com".to_string(),
        };

        assert_eq!(
            Route::from_str("/profile/ana.l%2Bx%40example.com").ok(),
            Some(route.clone())
        );
        assert_eq!(Route::from_str(&route.to_string()).ok(), Some(route));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Question { id: 12 }.to_string(), "/question/12");
        assert_eq!(
            Route::EditComment {
                questionid: 1,
                id: 2
            }
            .to_string(),
            "/question/1/comments/2"
        );
    }

    #[test]
    fn only_login_and_create_user_are_public() {
        let public = [Route::Login {}, Route::CreateUser {}];
        let private = [
            Route::Logout {},
            Route::Questions {},
            Route::Question { id: 1 },
            Route::CreateQuestion {},
            Route::CreateComment { id: 1 },
            Route::EditComment {
                questionid: 1,
                id: 1,
            },
            Route::Profile {
                email: "ana".to_string(),
            },
        ];

        assert!(public.iter().all(Route::is_public));
        assert!(!private.iter().any(Route::is_public));
    }
}

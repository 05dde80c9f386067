//! Tests for the routing system
//!
//! Validates route definitions, path recognition and the page each route
//! renders.

#[cfg(test)]
mod tests {
    use crate::routes::{ResetQuery, Route};
    use yew_router::Routable;

    /// Tests each path maps to the expected page
    #[test]
    fn test_path_to_page_id() {
        let cases = [
            ("/", "home-page"),
            ("/signup", "signup-page"),
            ("/login", "login-page"),
            ("/activation/123", "activation-page"),
            ("/activation/456", "activation-page"),
            ("/password-reset/request", "password-reset-request-page"),
            ("/password-reset/set", "password-reset-set-page"),
            ("/user/1", "user-page"),
        ];
        for (path, page_id) in cases {
            let route = Route::recognize(path).unwrap_or(Route::NotFound);
            assert_eq!(route.page_id(), page_id, "{path}");
        }
    }

    /// Tests route parameters are extracted
    #[test]
    fn test_route_parameters() {
        assert_eq!(
            Route::recognize("/activation/456"),
            Some(Route::Activation {
                token: "456".to_string()
            })
        );
        assert_eq!(Route::recognize("/user/42"), Some(Route::User { id: 42 }));
    }

    /// Tests unknown paths fall through to the not found page
    #[test]
    fn test_unknown_path() {
        let route = Route::recognize("/does/not/exist").unwrap_or(Route::NotFound);
        assert_eq!(route, Route::NotFound);
        assert_eq!(route.page_id(), "not-found-page");
    }

    /// Tests routes render back to their paths
    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::SignUp.to_path(), "/signup");
        assert_eq!(
            Route::Activation {
                token: "abc".to_string()
            }
            .to_path(),
            "/activation/abc"
        );
        assert_eq!(Route::User { id: 7 }.to_path(), "/user/7");
        assert_eq!(
            Route::PasswordResetSet.to_path(),
            "/password-reset/set"
        );
    }

    /// Tests the reset token query
    #[test]
    fn test_reset_query() {
        let query: ResetQuery = serde_json::from_str(r#"{"tk":"123"}"#).unwrap();
        assert_eq!(query.tk.as_deref(), Some("123"));

        let missing: ResetQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(missing, ResetQuery::default());
    }
}

//! OAuth 2.0 authorization-code flow for the Basecamp API.
//!
//! Basecamp uses the `web_server` variant of the authorization-code flow:
//! the user is sent to an authorization URL, grants access, and is
//! redirected back with a short-lived code which the application exchanges
//! for an access token in a single POST.
//!
//! # Example
//!
//! ```no_run
//! use basecampx_oauth::{Authorizer, Credentials};
//!
//! # async fn example() -> basecampx_oauth::Result<()> {
//! let authorizer = Authorizer::new(Credentials::new(
//!     "client-id",
//!     "client-secret",
//!     "https://example.com/callback",
//! ));
//!
//! // Send the user here...
//! println!("{}", authorizer.authorize_url());
//!
//! // ...then trade the code from the redirect for a token.
//! let token = authorizer.access_token("code-from-redirect").await?;
//! println!("access token: {}", token.access_token);
//! # Ok(())
//! # }
//! ```
//!
//! Token storage and refresh are left to the caller.

pub mod error;
pub mod oauth;

pub use error::{OAuthError, Result};
pub use oauth::{Authorizer, Credentials, OAuthConfig, TokenResponse};

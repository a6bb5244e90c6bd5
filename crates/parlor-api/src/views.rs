//! The three server-rendered pages, built by plain functions. Small enough
//! that a template engine would be more code than the pages themselves.
//! Every user-controlled string goes through [`escape`] before
//! interpolation.

use parlor_types::models::{ChatMessage, User};

/// HTML-escape a user-controlled string.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

pub fn landing_page(user: Option<&User>, flash: Option<&str>) -> String {
    let mut body = String::from("<h1>Parlor</h1>\n");

    match user {
        Some(user) => {
            body.push_str(&format!(
                "<p>Signed in as <strong>{}</strong></p>\n\
                 <p><a href=\"/chat\">Go to chat</a> | <a href=\"/log-out\">Log out</a></p>\n",
                escape(&user.username)
            ));
        }
        None => {
            if let Some(flash) = flash {
                body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(flash)));
            }
            body.push_str(
                "<form method=\"post\" action=\"/log-in\">\n\
                 <input name=\"username\" placeholder=\"username\">\n\
                 <input name=\"password\" type=\"password\" placeholder=\"password\">\n\
                 <button type=\"submit\">Log in</button>\n\
                 </form>\n\
                 <p><a href=\"/sign-up\">Sign up</a></p>\n",
            );
        }
    }

    page("Parlor", &body)
}

pub fn sign_up_page() -> String {
    page(
        "Sign up",
        "<h1>Sign up</h1>\n\
         <form method=\"post\" action=\"/sign-up\">\n\
         <input name=\"username\" placeholder=\"username\">\n\
         <input name=\"password\" type=\"password\" placeholder=\"password\">\n\
         <button type=\"submit\">Sign up</button>\n\
         </form>\n\
         <p><a href=\"/\">Back</a></p>\n",
    )
}

pub fn chat_page(user: &User, messages: &[ChatMessage]) -> String {
    let mut body = format!(
        "<h1>Chat</h1>\n\
         <p>Posting as <strong>{}</strong> | <a href=\"/log-out\">Log out</a></p>\n\
         <ul>\n",
        escape(&user.username)
    );

    for msg in messages {
        body.push_str(&format!(
            "<li><strong>{}</strong>: {} <em>{}</em></li>\n",
            escape(&msg.author_username),
            escape(&msg.text),
            msg.created_at.format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    body.push_str(
        "</ul>\n\
         <form method=\"post\" action=\"/chat\">\n\
         <input name=\"message\" placeholder=\"say something\">\n\
         <button type=\"submit\">Post</button>\n\
         </form>\n",
    );

    page("Chat", &body)
}

pub fn error_page() -> String {
    page("Error", "<h1>Something went wrong</h1>\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>alert('&')</script>"),
            "&lt;script&gt;alert(&#39;&amp;&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn chat_page_escapes_message_text() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            created_at: Utc::now(),
        };
        let msg = ChatMessage {
            id: Uuid::new_v4(),
            author_id: user.id,
            author_username: "<bob>".into(),
            text: "<script>".into(),
            created_at: Utc::now(),
        };

        let html = chat_page(&user, &[msg]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;bob&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn landing_page_shows_flash_only_when_anonymous() {
        let html = landing_page(None, Some("Incorrect password"));
        assert!(html.contains("Incorrect password"));

        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            created_at: Utc::now(),
        };
        let html = landing_page(Some(&user), None);
        assert!(html.contains("alice"));
        assert!(html.contains("/log-out"));
    }
}

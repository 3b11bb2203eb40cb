use std::fmt;

/// Sender identity as reported by the messaging channel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: Option<impl Into<String>>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = last.map(|l| l.into());
        self
    }

    pub fn display_name(&self) -> String {
        match (&self.username, &self.first_name, &self.last_name) {
            (Some(username), _, _) => format!("@{}", username),
            (None, Some(first), Some(last)) => format!("{} {}", first, last),
            (None, Some(first), None) => first.clone(),
            (None, None, _) => self.id.clone(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_username() {
        let user = User::new("42").with_username("samir").with_name("Samir", Some("X"));
        assert_eq!(user.display_name(), "@samir");

        let user = User::new("42").with_name("Samir", None::<String>);
        assert_eq!(user.display_name(), "Samir");

        assert_eq!(User::new("42").display_name(), "42");
    }
}

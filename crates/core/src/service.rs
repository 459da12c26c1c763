//! The three services this workspace ships.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Venue/artist/show listings.
    Fyyur,
    /// Trivia questions and quizzes.
    Trivia,
    /// Drinks menu with permission-checked mutations.
    CoffeeShop,
}

impl Service {
    /// Stable identifier used in logs and the health payload.
    pub fn name(self) -> &'static str {
        match self {
            Service::Fyyur => "fyyur",
            Service::Trivia => "trivia",
            Service::CoffeeShop => "coffee-shop",
        }
    }

    /// Port the service binds to when `PORT` is unset.
    pub fn default_port(self) -> u16 {
        match self {
            Service::Fyyur => 5000,
            Service::Trivia => 5001,
            Service::CoffeeShop => 5002,
        }
    }

    /// Whether requests must carry a verified bearer token.
    pub fn requires_auth(self) -> bool {
        matches!(self, Service::CoffeeShop)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ports_are_distinct() {
        let services = [Service::Fyyur, Service::Trivia, Service::CoffeeShop];
        let ports: HashSet<u16> = services.iter().map(|s| s.default_port()).collect();
        assert_eq!(ports.len(), services.len());
    }

    #[test]
    fn only_coffee_shop_requires_auth() {
        assert!(Service::CoffeeShop.requires_auth());
        assert!(!Service::Fyyur.requires_auth());
        assert!(!Service::Trivia.requires_auth());
    }
}

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::CommandRegistry;

/// Commands sharing one category, in registration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: String,
    pub commands: Vec<String>,
}

/// Group command names by category. Categories keep first-seen order.
pub fn list_by_category(registry: &CommandRegistry) -> Vec<CategoryListing> {
    let mut listings: Vec<CategoryListing> = Vec::new();

    for cmd in registry.all() {
        match listings.iter_mut().find(|l| l.category == cmd.category) {
            Some(listing) => listing.commands.push(cmd.name.clone()),
            None => listings.push(CategoryListing {
                category: cmd.category.clone(),
                commands: vec![cmd.name.clone()],
            }),
        }
    }

    listings
}

/// Detail view of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorView<'a> {
    pub name: &'a str,
    pub author: Option<&'a str>,
    pub description: Option<&'a str>,
    pub usage: Option<&'a str>,
}

impl fmt::Display for DescriptorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "─── {} ────⭓", self.name.to_uppercase())?;
        writeln!(f, "» Author: {}", self.author.unwrap_or("Unknown"))?;
        writeln!(f, "» Description: {}", self.description.unwrap_or("No description"))?;
        if let Some(usage) = self.usage {
            writeln!(f, "─── USAGE ────⭓")?;
            writeln!(f, "» {}", usage)?;
        }
        Ok(())
    }
}

/// Help requested for a name that is not registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupMiss {
    pub name: String,
}

impl fmt::Display for LookupMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command \"{}\" not found.", self.name)
    }
}

/// Exact, case-sensitive lookup
pub fn describe<'a>(registry: &'a CommandRegistry, name: &str) -> Result<DescriptorView<'a>, LookupMiss> {
    registry
        .get(name)
        .map(|cmd| DescriptorView {
            name: &cmd.name,
            author: cmd.author.as_deref(),
            description: cmd.description.as_deref(),
            usage: cmd.usage.as_deref(),
        })
        .ok_or_else(|| LookupMiss { name: name.to_string() })
}

pub fn render_listing(listings: &[CategoryListing]) -> String {
    if listings.is_empty() {
        return "No commands available.".to_string();
    }

    let mut help = String::new();
    for listing in listings {
        help.push_str(&format!("\n╭──『 {} 』\n", listing.category));
        help.push_str(&format!("✧{}\n", listing.commands.join(" ✧")));
        help.push_str("╰───────────◊\n");
    }
    help
}

/// Read-only help view over the loaded registry
pub struct HelpService {
    registry: Arc<CommandRegistry>,
}

impl HelpService {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Category listing when `command` is `None`, otherwise one command's detail
    pub fn get_help(&self, command: Option<&str>) -> String {
        match command {
            Some(name) => match describe(&self.registry, name) {
                Ok(view) => view.to_string(),
                Err(miss) => miss.to_string(),
            },
            None => render_listing(&list_by_category(&self.registry)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::messaging::DispatchContext;
    use crate::domain::entities::{CommandDescriptor, Role};
    use crate::plugins::{HandlerResult, Plugin, PluginConfig};

    struct Noop;

    #[async_trait]
    impl Plugin for Noop {
        fn config(&self) -> PluginConfig {
            PluginConfig::new("noop")
        }

        async fn on_start(&self, _ctx: DispatchContext) -> HandlerResult {
            Ok(())
        }
    }

    fn command(name: &str, category: &str) -> CommandDescriptor {
        CommandDescriptor {
            name: name.to_string(),
            use_prefix: true,
            role: Role::EVERYONE,
            category: category.to_string(),
            author: None,
            description: None,
            usage: None,
            handler: Arc::new(Noop),
        }
    }

    fn registry(commands: Vec<CommandDescriptor>) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for cmd in commands {
            registry.register(cmd).unwrap();
        }
        registry
    }

    #[test]
    fn groups_by_first_seen_category() {
        let registry = registry(vec![command("one", "A"), command("two", "B"), command("three", "A")]);

        let listings = list_by_category(&registry);
        assert_eq!(
            listings,
            vec![
                CategoryListing { category: "A".into(), commands: vec!["one".into(), "three".into()] },
                CategoryListing { category: "B".into(), commands: vec!["two".into()] },
            ]
        );

        let text = render_listing(&listings);
        assert!(text.contains("╭──『 A 』\n✧one ✧three\n"));
        assert!(text.find("『 A 』").unwrap() < text.find("『 B 』").unwrap());
    }

    #[test]
    fn describe_renders_usage_only_when_present() {
        let mut with_usage = command("ping", "System");
        with_usage.author = Some("xar".into());
        with_usage.description = Some("Check latency".into());
        with_usage.usage = Some("/ping".into());
        let registry = registry(vec![with_usage, command("bare", "System")]);

        let text = describe(&registry, "ping").unwrap().to_string();
        assert_eq!(
            text,
            "─── PING ────⭓\n» Author: xar\n» Description: Check latency\n─── USAGE ────⭓\n» /ping\n"
        );

        let text = describe(&registry, "bare").unwrap().to_string();
        assert!(!text.contains("USAGE"));
        assert!(text.contains("» Author: Unknown"));
    }

    #[test]
    fn lookup_is_exact_and_reports_the_name() {
        let registry = Arc::new(registry(vec![command("ping", "System")]));

        let miss = describe(&registry, "doesnotexist").unwrap_err();
        assert_eq!(miss.name, "doesnotexist");
        assert!(describe(&registry, "PING").is_err());

        let help = HelpService::new(registry);
        assert_eq!(help.get_help(Some("doesnotexist")), "Command \"doesnotexist\" not found.");
    }

    #[test]
    fn empty_registry_has_placeholder_listing() {
        let help = HelpService::new(Arc::new(CommandRegistry::new()));
        assert_eq!(help.get_help(None), "No commands available.");
    }
}

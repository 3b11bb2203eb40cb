//! Plugin loader integration tests
//! Run with: cargo test --test loader_test

mod common;

use std::fs;
use std::sync::Arc;

use common::*;
use xar_bot::application::errors::LoadError;
use xar_bot::domain::entities::{CommandRegistry, Role, DEFAULT_CATEGORY};
use xar_bot::infrastructure::plugins::{ManifestDirectory, PluginCandidate, PluginLoader, PluginSource};
use xar_bot::plugins::{Plugin, PluginCatalogue, PluginConfig};

/// In-memory source yielding fixed candidates
struct Fixed(Vec<(String, Result<PluginConfig, &'static str>)>);

impl PluginSource for Fixed {
    fn candidates(&self) -> Vec<PluginCandidate> {
        self.0
            .iter()
            .map(|(origin, config)| PluginCandidate {
                origin: origin.clone(),
                definition: match config {
                    Ok(config) => {
                        let handler: Arc<dyn Plugin> = Arc::new(Echo { config: config.clone() });
                        Ok((config.clone(), handler))
                    }
                    Err(field) => Err(LoadError::MissingField(*field)),
                },
            })
            .collect()
    }
}

fn fixed(configs: Vec<Result<PluginConfig, &'static str>>) -> Fixed {
    Fixed(
        configs
            .into_iter()
            .enumerate()
            .map(|(i, c)| (format!("fixed:{}", i), c))
            .collect(),
    )
}

fn catalogue() -> PluginCatalogue {
    let mut catalogue = PluginCatalogue::new();
    catalogue.register(Echo::named("echo")).unwrap();
    catalogue.register(Faulty).unwrap();
    catalogue
}

#[test]
fn valid_plugins_load_in_discovery_order() {
    ensure_init();
    let source = fixed(vec![
        Ok(PluginConfig::new("zeta")),
        Ok(PluginConfig::new("alpha").prefixed()),
        Ok(PluginConfig::new("mid")),
    ]);

    let registry = PluginLoader::new().load(&[&source]);
    assert_eq!(registry.names(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn invalid_plugins_are_skipped_without_aborting() {
    ensure_init();
    let source = fixed(vec![
        Ok(PluginConfig::new("first")),
        Err("handler"),
        Ok(PluginConfig::new("")),
        Ok(PluginConfig::new("two words")),
        Ok(PluginConfig::new("first")),
        Ok(PluginConfig::new("last")),
    ]);

    let registry = PluginLoader::new().load(&[&source]);
    assert_eq!(registry.names(), vec!["first", "last"]);
}

#[test]
fn role_defaults_to_zero_and_is_otherwise_preserved() {
    ensure_init();
    let source = fixed(vec![
        Ok(PluginConfig::new("public")),
        Ok(PluginConfig::new("owner").with_role(1)),
        Ok(PluginConfig::new("odd").with_role(2)),
    ]);

    let registry = PluginLoader::new().load(&[&source]);
    assert_eq!(registry.get("public").unwrap().role, Role::EVERYONE);
    assert_eq!(registry.get("owner").unwrap().role, Role::OWNER);
    assert_eq!(registry.get("odd").unwrap().role, Role(2));
    assert_eq!(registry.get("public").unwrap().category, DEFAULT_CATEGORY);
}

#[test]
fn duplicate_is_rejected_by_single_load() {
    let mut registry = CommandRegistry::new();
    let loader = PluginLoader::new();

    let candidate = |name: &str| PluginCandidate {
        origin: "test".to_string(),
        definition: {
            let handler: Arc<dyn Plugin> = Arc::new(Echo::named(name));
            Ok((PluginConfig::new(name), handler))
        },
    };

    assert!(loader.load_plugin(&mut registry, candidate("once")).is_ok());
    let err = loader.load_plugin(&mut registry, candidate("once")).unwrap_err();
    assert!(matches!(err, LoadError::Duplicate(name) if name == "once"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn manifest_directory_binds_catalogue_handlers() {
    ensure_init();
    let dir = tempfile::tempdir().unwrap();
    let write = |name: &str, body: &str| fs::write(dir.path().join(name), body).unwrap();

    write("10-hi.yaml", "name: hi\nhandler: echo\ncategory: Fun\n");
    write("20-broken.yaml", "name: [unclosed\n");
    write("30-noname.yml", "handler: echo\n");
    write("40-unknown.yaml", "name: ghost\nhandler: nope\n");
    write("50-admin.yml", "name: kill\nhandler: boom\nuse-prefix: true\nrole: 1\nusage: kill\n");
    write("60-dup.yaml", "name: echo\nhandler: echo\n");
    write("notes.txt", "name: ignored\nhandler: echo\n");
    write(".hidden.yaml", "name: hidden\nhandler: echo\n");

    let catalogue = catalogue();
    let manifests = ManifestDirectory::new(dir.path(), &catalogue);
    let sources: [&dyn PluginSource; 2] = [&catalogue, &manifests];
    let registry = PluginLoader::new().load(&sources);

    assert_eq!(registry.names(), vec!["echo", "boom", "hi", "kill"]);

    let hi = registry.get("hi").unwrap();
    assert!(!hi.use_prefix);
    assert_eq!(hi.role, Role::EVERYONE);
    assert_eq!(hi.category, "Fun");
    assert_eq!(hi.handler.config().name, "echo");

    let kill = registry.get("kill").unwrap();
    assert!(kill.use_prefix);
    assert_eq!(kill.role, Role::OWNER);
    assert_eq!(kill.usage.as_deref(), Some("kill"));
}

#[test]
fn missing_manifest_directory_contributes_nothing() {
    ensure_init();
    let dir = tempfile::tempdir().unwrap();
    let catalogue = catalogue();
    let manifests = ManifestDirectory::new(dir.path().join("absent"), &catalogue);

    assert!(manifests.candidates().is_empty());
}

#[test]
fn builtin_catalogue_loads_cleanly() {
    ensure_init();
    let catalogue = PluginCatalogue::builtin();
    let registry = PluginLoader::new().load(&[&catalogue]);

    assert_eq!(registry.len(), catalogue.len());
    assert_eq!(registry.names(), vec!["ping", "say", "uid", "news", "adminonly"]);
    assert_eq!(registry.get("adminonly").unwrap().role, Role::OWNER);
    assert!(registry.all().all(|c| c.use_prefix));
}

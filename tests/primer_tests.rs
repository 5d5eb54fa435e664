//! Primitive discovery, recent cache and prompt assembly integration tests
//!
//! Every test builds a fake home, working directory and cache root under a
//! temporary directory and drives the public library API.

use std::fs;
use std::path::{Path, PathBuf};

use agent_primer::primitive::ReferenceMetadata;
use agent_primer::{
    assemble_system_prompt, builtin_primitives, cache_key, sort_by_recent, Environment,
    PrimitiveItem, PrimitiveKind, RecentCache, RecentCacheStore, Source, MAX_RECENT,
};
use tempfile::TempDir;

struct Fixture {
    _temp: TempDir,
    env: Environment,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let env = Environment::new(
            temp.path().join("home"),
            temp.path().join("work"),
            temp.path().join("cache"),
        );
        fs::create_dir_all(&env.home_dir).unwrap();
        fs::create_dir_all(&env.working_dir).unwrap();
        Self { _temp: temp, env }
    }

    fn write(&self, root: &Path, dir: &str, file: &str, content: &str) -> PathBuf {
        let path = root.join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join(file), content).unwrap();
        path.join(file)
    }

    fn global(&self, kind: PrimitiveKind) -> PathBuf {
        self.env.global_root(kind)
    }

    fn local(&self, kind: PrimitiveKind) -> PathBuf {
        self.env.local_root(kind)
    }
}

fn discover_all(env: &Environment) -> Vec<PrimitiveItem> {
    builtin_primitives(env)
        .iter()
        .flat_map(|p| p.discover_items())
        .collect()
}

// =============================================================================
// Discovery
// =============================================================================

mod discovery_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_single_skill() {
        let fx = Fixture::new();
        let path = fx.write(
            &fx.global(PrimitiveKind::Skill),
            "foo-skill",
            "SKILL.md",
            "---\nname: foo\ndescription: bar\n---\n# Foo\n\nUse foo.\n",
        );
        fs::create_dir_all(path.parent().unwrap().join("references")).unwrap();

        let primitives = builtin_primitives(&fx.env);
        let items = primitives[0].discover_items();

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.kind, PrimitiveKind::Skill);
        assert_eq!(item.name, "foo");
        assert_eq!(item.description, "bar");
        assert_eq!(item.source, Source::Global);
        assert_eq!(item.path, path);

        let content = primitives[0].load_content(item).unwrap();
        let meta = ReferenceMetadata::from_metadata(&content.metadata);
        assert!(meta.references.is_empty());

        let out = primitives[0].format_for_prompt(&[content]);
        assert!(out
            .lines()
            .any(|l| l == "AGENT PRIMER: ACTIVE SKILLS FOR THIS SESSION"));
        assert!(out.lines().any(|l| l == "## foo"));
        assert!(out.contains("END AGENT PRIMER"));
        assert!(out.contains("Use foo."));
    }

    #[test]
    fn test_names_and_descriptions_never_empty() {
        let fx = Fixture::new();
        fx.write(&fx.global(PrimitiveKind::Skill), "plain", "SKILL.md", "No front matter");
        fx.write(
            &fx.local(PrimitiveKind::Skill),
            "blank",
            "SKILL.md",
            "---\nname: \"\"\n---\nBody",
        );
        fx.write(
            &fx.global(PrimitiveKind::Domain),
            "broken",
            "DOMAIN.md",
            "---\nname: [oops\n---\nBody",
        );

        let items = discover_all(&fx.env);
        assert_eq!(items.len(), 3);
        for item in &items {
            assert!(!item.name.is_empty());
            assert!(!item.description.is_empty());
        }
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["plain", "blank", "broken"]);
        assert!(items.iter().all(|i| i.description == "No description provided"));
    }

    #[test]
    fn test_required_file_directly_in_root() {
        let fx = Fixture::new();
        let root = fx.global(PrimitiveKind::Skill);
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("SKILL.md"), "---\nname: rooted\n---\n").unwrap();

        let items = discover_all(&fx.env);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, root.join("SKILL.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_link_does_not_abort_scan() {
        let fx = Fixture::new();
        let root = fx.global(PrimitiveKind::Skill);
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(root.join("nowhere"), root.join("a-dangling")).unwrap();
        fx.write(&root, "z-real", "SKILL.md", "---\nname: real\n---\n");

        let items = discover_all(&fx.env);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "real");
    }

    #[test]
    fn test_home_as_working_dir() {
        let temp = TempDir::new().unwrap();
        let env = Environment::new(temp.path(), temp.path(), temp.path().join("cache"));
        let skills = env.global_root(PrimitiveKind::Skill);
        let domains = env.global_root(PrimitiveKind::Domain);
        fs::create_dir_all(skills.join("s")).unwrap();
        fs::write(skills.join("s/SKILL.md"), "").unwrap();
        fs::create_dir_all(domains.join("d")).unwrap();
        fs::write(domains.join("d/DOMAIN.md"), "").unwrap();

        let items = discover_all(&env);
        let skill_count = items.iter().filter(|i| i.kind == PrimitiveKind::Skill).count();
        let domain_count = items.iter().filter(|i| i.kind == PrimitiveKind::Domain).count();

        // skills are deduplicated, domains are not
        assert_eq!(skill_count, 1);
        assert_eq!(domain_count, 2);
    }
}

// =============================================================================
// Recent cache
// =============================================================================

mod cache_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(name: &str, source: Source) -> PrimitiveItem {
        PrimitiveItem {
            kind: PrimitiveKind::Skill,
            name: name.to_string(),
            description: "d".to_string(),
            path: PathBuf::from(format!("/{}/SKILL.md", name)),
            source,
        }
    }

    #[test]
    fn test_cache_key_identity() {
        let a = item("foo", Source::Global);
        let mut b = a.clone();
        b.path = PathBuf::from("/other/SKILL.md");
        let c = item("foo", Source::Local);

        assert_eq!(cache_key(&a), cache_key(&b));
        assert_ne!(cache_key(&a), cache_key(&c));
    }

    #[test]
    fn test_sort_orders_c_a_b() {
        let a = item("mango", Source::Global);
        let b = item("banana", Source::Global);
        let c = item("apple", Source::Global);
        let mut cache = RecentCache::default();
        cache.recent.insert(cache_key(&a), 5000);
        cache.recent.insert(cache_key(&c), 5000);

        let sorted = sort_by_recent(&[a, b, c], &cache);
        let names: Vec<_> = sorted.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "mango", "banana"]);
    }

    #[test]
    fn test_update_keeps_ten_most_recent() {
        let fx = Fixture::new();
        let store = RecentCacheStore::new(fx.env.cache_file());

        for i in 0..25 {
            store.update_at(&[item(&format!("s{:02}", i), Source::Global)], 1_000 + i);
            assert!(store.load().len() <= MAX_RECENT);
        }

        let cache = store.load();
        assert_eq!(cache.len(), MAX_RECENT);
        for i in 15..25 {
            assert!(cache.contains(&item(&format!("s{:02}", i), Source::Global)));
        }
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let fx = Fixture::new();
        let store = RecentCacheStore::new(fx.env.cache_file());
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();

        for content in ["", "{not json", r#"{"recent": "not-an-object"}"#, "[]"] {
            fs::write(store.path(), content).unwrap();
            assert_eq!(store.load(), RecentCache::default());
        }
    }

    #[test]
    fn test_file_format() {
        let fx = Fixture::new();
        let store = RecentCacheStore::new(fx.env.cache_file());
        store.update_at(&[item("foo", Source::Local)], 1_700_000_000_000);

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(fx.env.cache_file()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({ "recent": { "skill:local:foo": 1_700_000_000_000i64 } })
        );
    }

    #[test]
    fn test_clear_reports_removal() {
        let fx = Fixture::new();
        let store = RecentCacheStore::new(fx.env.cache_file());

        assert!(!store.clear());
        store.update_at(&[item("foo", Source::Global)], 1);
        assert!(store.clear());
        assert!(!fx.env.cache_file().exists());
    }
}

// =============================================================================
// Prompt assembly
// =============================================================================

mod assembly_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_contains_both_groups() {
        let fx = Fixture::new();
        let skill = fx.write(
            &fx.local(PrimitiveKind::Skill),
            "review",
            "SKILL.md",
            "---\nname: review\ndescription: Review code\n---\nCheck tests first.",
        );
        fs::create_dir_all(skill.parent().unwrap().join("references")).unwrap();
        fs::write(skill.parent().unwrap().join("references/checklist.md"), "").unwrap();
        fx.write(
            &fx.global(PrimitiveKind::Domain),
            "payments",
            "DOMAIN.md",
            "---\ndescription: Card payments\n---\nPSP is Stripe.",
        );

        let primitives = builtin_primitives(&fx.env);
        let items = discover_all(&fx.env);
        let prompt = assemble_system_prompt(&primitives, &items).unwrap().unwrap();

        let skills_at = prompt.find("AGENT PRIMER: ACTIVE SKILLS FOR THIS SESSION").unwrap();
        let domains_at = prompt.find("AGENT PRIMER: ACTIVE DOMAINS FOR THIS SESSION").unwrap();
        assert!(skills_at < domains_at);
        assert!(prompt.contains("## review"));
        assert!(prompt.contains("## payments"));
        assert!(prompt.contains("- checklist.md"));
        assert!(prompt.contains("PSP is Stripe."));
        assert!(!prompt.contains("description: Card payments"));
    }

    #[test]
    fn test_removed_file_fails_assembly() {
        let fx = Fixture::new();
        let path = fx.write(&fx.global(PrimitiveKind::Skill), "tmp", "SKILL.md", "x");

        let primitives = builtin_primitives(&fx.env);
        let items = discover_all(&fx.env);
        fs::remove_file(path).unwrap();

        assert!(assemble_system_prompt(&primitives, &items).is_err());
    }
}

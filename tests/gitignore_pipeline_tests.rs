use cli_showcase::commands::generate_gitignore;
use cli_showcase::core::selection::PresetSelector;
use cli_showcase::{assemble, build_catalog, MemoryClient, ShowcaseError};
use tempfile::TempDir;

mod common;
use common::{assertions::*, fixtures::*};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_merges_sources_first_wins() -> anyhow::Result<()> {
        let client = github_client();

        let catalog = build_catalog(&client, &SOURCES).await?;

        assert_eq!(catalog.names(), names(&["Node", "Python", "Go"]));
        let node = catalog.get("Node").expect("Node in catalog");
        assert_eq!(node.path, "Node.gitignore");
        assert_eq!(node.url, SOURCE_A.raw_url("Node.gitignore"));
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_entries_respect_source_filters() -> anyhow::Result<()> {
        let client = github_client();

        let catalog = build_catalog(&client, &SOURCES).await?;

        for entry in catalog.iter() {
            assert!(entry.path.ends_with(".gitignore"), "{}", entry.path);
        }
        let go = catalog.get("Go").expect("Go in catalog");
        assert!(go.path.starts_with("templates"));
        assert!(catalog.get("order").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_requests_every_tree_once() -> anyhow::Result<()> {
        let client = github_client();

        build_catalog(&client, &SOURCES).await?;

        let mut requests = client.requests();
        requests.sort();
        let mut expected = vec![SOURCE_A.tree_url(), SOURCE_B.tree_url()];
        expected.sort();
        assert_eq!(requests, expected);
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_fails_without_partial_result() {
        let client = MemoryClient::new()
            .with_body(SOURCE_A.tree_url(), tree_body(&["Node.gitignore"]))
            .with_status(SOURCE_B.tree_url(), 403);

        let result = build_catalog(&client, &SOURCES).await;

        assert!(matches!(
            result,
            Err(ShowcaseError::UnexpectedStatus { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_catalog_rejects_malformed_tree() {
        let client = MemoryClient::new()
            .with_body(SOURCE_A.tree_url(), "<html>rate limited</html>")
            .with_body(SOURCE_B.tree_url(), tree_body(&[]));

        let err = build_catalog(&client, &SOURCES).await.unwrap_err();

        assert!(err.is_parse_error());
    }
}

#[cfg(test)]
mod assembly_tests {
    use super::*;

    #[tokio::test]
    async fn test_selected_sections_in_selection_order() -> anyhow::Result<()> {
        let client = github_client();
        let catalog = build_catalog(&client, &SOURCES).await?;
        let selected = catalog.resolve(&names(&["Go", "Python"]))?;

        let content = assemble(&client, &selected).await?;

        assert_eq!(section_order(&content), names(&["Go", "Python"]));
        assert_eq!(section_count(&content, "Go"), 1);
        assert_eq!(section_count(&content, "Python"), 1);
        assert!(content.starts_with("# ======================================="));
        assert!(content.ends_with("# ======================================="));
        assert_eq!(content.matches("#   Templates: Go, Python\n").count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_name_uses_first_source_content() -> anyhow::Result<()> {
        let client = github_client();
        let catalog = build_catalog(&client, &SOURCES).await?;
        let selected = catalog.resolve(&names(&["Node"]))?;

        let content = assemble(&client, &selected).await?;

        assert!(content.contains(NODE_A));
        assert!(!content.contains(NODE_B));
        Ok(())
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_writes_selected_templates() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.path().join(".gitignore");
        let client = github_client();
        let selector = PresetSelector::new(names(&["Python", "Go"]));

        generate_gitignore(&client, &selector, &SOURCES, &output).await?;

        let content = std::fs::read_to_string(&output)?;
        assert_eq!(section_order(&content), names(&["Python", "Go"]));
        assert!(content.contains(PYTHON));
        assert!(content.contains(GO));
        assert!(!content.contains("### Node ###"));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_writes_nothing_when_a_download_fails() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.path().join(".gitignore");
        let client = client_with_broken_go();
        let selector = PresetSelector::new(names(&["Python", "Go"]));

        let result = generate_gitignore(&client, &selector, &SOURCES, &output).await;

        assert!(matches!(result, Err(ref e) if e.is_fetch_error()));
        assert!(!output.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_skips_downloads_for_unknown_template() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.path().join(".gitignore");
        let client = github_client();
        let selector = PresetSelector::new(names(&["Cobol"]));

        let result = generate_gitignore(&client, &selector, &SOURCES, &output).await;

        assert!(matches!(result, Err(ShowcaseError::UnknownTemplate { .. })));
        assert_eq!(client.requests().len(), 2);
        assert!(!output.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_reports_write_failure() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.path().join("missing-dir").join(".gitignore");
        let client = github_client();
        let selector = PresetSelector::new(names(&["Go"]));

        let result = generate_gitignore(&client, &selector, &SOURCES, &output).await;

        assert!(matches!(result, Err(ShowcaseError::WriteFailed { .. })));
        Ok(())
    }
}

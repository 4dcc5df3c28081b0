//! Preserved quirks of the parameterized token classes
//!
//! `${env:...}` and `${config:...}` resolve every occurrence from the
//! first match's name, unlike `${workspaceFolder:NAME}` which is scoped
//! per name. The behaviour is inconsistent but deliberate: it is kept for
//! fidelity with the host's historical resolution, and these tests pin it
//! down so nobody "fixes" it silently.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use varsub_core::ConfigService;
use varsub_test_utils::{MemoryConfig, ScriptedEditor, StaticEnv};

fn build_service(config: Value, editor: ScriptedEditor, process: StaticEnv) -> ConfigService {
    ConfigService::new(
        Arc::new(MemoryConfig::new(config)),
        Arc::new(editor),
        Arc::new(process),
    )
}

#[tokio::test]
async fn named_workspace_roots_are_scoped_per_name() {
    let config = json!({
        "front": "${workspaceFolder:frontend}/src",
        "back": "${workspaceFolder:backend}/api",
        "front_again": "${workspaceFolder:frontend}/tests",
        "unknown": "${workspaceFolder:nonexistent}/x"
    });
    let editor = ScriptedEditor::closed()
        .with_named_root("frontend", "/workspace/frontend")
        .with_named_root("backend", "/workspace/backend");
    let service = build_service(config, editor, StaticEnv::new());

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({
            "front": "/workspace/frontend/src",
            "back": "/workspace/backend/api",
            "front_again": "/workspace/frontend/tests",
            "unknown": "${workspaceFolder:nonexistent}/x"
        })
    );
}

#[tokio::test]
async fn named_workspace_roots_stay_verbatim_without_open_roots() {
    let config = json!({ "path": "${workspaceFolder:myproject}/api" });
    let service = build_service(config, ScriptedEditor::closed(), StaticEnv::new());

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(resolved, json!({ "path": "${workspaceFolder:myproject}/api" }));
}

#[tokio::test]
async fn env_references_all_take_the_first_matched_variable() {
    let config = json!({
        "home": "${env:HOME}",
        "shell": "${env:SHELL}"
    });
    let process = StaticEnv::new()
        .with_var("HOME", "/home/user")
        .with_var("SHELL", "/bin/zsh");
    let service = build_service(config, ScriptedEditor::closed(), process);

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({ "home": "/home/user", "shell": "/home/user" })
    );
}

#[tokio::test]
async fn unset_first_env_variable_blocks_every_replacement() {
    let config = json!({
        "missing": "${env:VARSUB_UNSET}",
        "present": "${env:HOME}"
    });
    let process = StaticEnv::new().with_var("HOME", "/home/user");
    let service = build_service(config, ScriptedEditor::closed(), process);

    // VARSUB_UNSET is the first match, so even the HOME reference stays.
    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({
            "missing": "${env:VARSUB_UNSET}",
            "present": "${env:HOME}"
        })
    );
}

#[tokio::test]
async fn config_references_all_take_the_first_matched_path() {
    let config = json!({
        "font": "${config:editor.fontSize}",
        "tabs": "${config:editor.tabSize}",
        "editor": { "fontSize": 16, "tabSize": 2 }
    });
    let service = build_service(config, ScriptedEditor::closed(), StaticEnv::new());

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({
            "font": "16",
            "tabs": "16",
            "editor": { "fontSize": 16, "tabSize": 2 }
        })
    );
}

#[tokio::test]
async fn config_references_consult_the_full_store_from_a_subtree() {
    let config = json!({
        "tasks": { "size": "${config:editor.fontSize}" },
        "editor": { "fontSize": 14 }
    });
    let service = build_service(config, ScriptedEditor::closed(), StaticEnv::new());

    // Selecting `tasks` still resolves against the whole snapshot.
    let resolved = service.get_config(Some("tasks")).await.unwrap();
    assert_eq!(resolved, json!({ "size": "14" }));
}

#[tokio::test]
async fn config_reference_through_denied_segment_stays_verbatim() {
    let config = json!({ "value": "${config:a.__proto__.b}", "a": { "b": 1 } });
    let service = build_service(config, ScriptedEditor::closed(), StaticEnv::new());

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({ "value": "${config:a.__proto__.b}", "a": { "b": 1 } })
    );
}

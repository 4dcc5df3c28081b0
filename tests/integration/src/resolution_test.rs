//! End-to-end resolution through the public entry point
//!
//! Exercises the complete flow: snapshot -> dotted selection -> token
//! substitution -> structured result, against scripted host fakes.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use varsub_core::ConfigService;
use varsub_test_utils::{MemoryConfig, ScriptedEditor, StaticEnv};

fn workspace_editor() -> ScriptedEditor {
    ScriptedEditor::closed()
        .with_document("/workspace/project/src/index.ts")
        .with_active_root("project", "/workspace/project")
        .with_cursor_line(42)
        .with_selections(&["selected text"])
}

fn build_service(config: Value, editor: ScriptedEditor, process: StaticEnv) -> ConfigService {
    ConfigService::new(
        Arc::new(MemoryConfig::new(config)),
        Arc::new(editor),
        Arc::new(process),
    )
}

#[tokio::test]
async fn resolves_a_mixed_document_in_one_call() {
    let config = json!({
        "paths": {
            "workspace": "${workspaceFolder}",
            "current": "${file}",
            "relative": "${relativeFile}",
            "dir": "${relativeFileDirname}"
        },
        "names": {
            "root": "${workspaceFolderBasename}",
            "base": "${fileBasename}",
            "stem": "${fileBasenameNoExtension}",
            "ext": "${fileExtname}"
        },
        "system": {
            "cwd": "${cwd}",
            "exec": "${execPath}",
            "sep": "${pathSeparator}"
        },
        "editor": {
            "line": "${lineNumber}",
            "selection": "${selectedText}"
        }
    });
    let process = StaticEnv::new()
        .with_cwd("/home/user/project")
        .with_exec_path("/usr/local/bin/edit-host");
    let service = build_service(config, workspace_editor(), process);

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({
            "paths": {
                "workspace": "/workspace/project",
                "current": "/workspace/project/src/index.ts",
                "relative": "src/index.ts",
                "dir": "src"
            },
            "names": {
                "root": "project",
                "base": "index.ts",
                "stem": "index",
                "ext": ".ts"
            },
            "system": {
                "cwd": "/home/user/project",
                "exec": "/usr/local/bin/edit-host",
                "sep": "/"
            },
            "editor": {
                "line": "43",
                "selection": "selected text"
            }
        })
    );
}

#[tokio::test]
async fn arrays_substitute_element_wise() {
    let config = json!({ "items": ["${cwd}/src", "${cwd}/tests", "${cwd}/dist"] });
    let service = build_service(
        config,
        ScriptedEditor::closed(),
        StaticEnv::new().with_cwd("/work"),
    );

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({ "items": ["/work/src", "/work/tests", "/work/dist"] })
    );
}

#[tokio::test]
async fn missing_editor_leaves_tokens_verbatim_and_warns() {
    let config = json!({ "path": "${file}", "ws": "${workspaceFolder}" });
    let editor = Arc::new(ScriptedEditor::closed());
    let service = ConfigService::new(
        Arc::new(MemoryConfig::new(config)),
        editor.clone(),
        Arc::new(StaticEnv::new()),
    );

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(
        resolved,
        json!({ "path": "${file}", "ws": "${workspaceFolder}" })
    );
    assert!(editor.warnings().contains(&"No open editors".to_string()));
}

#[tokio::test]
async fn missing_workspace_warns_no_open_workspaces() {
    let config = json!({ "ws": "${workspaceFolder}" });
    let editor = Arc::new(ScriptedEditor::closed().with_document("/file.ts"));
    let service = ConfigService::new(
        Arc::new(MemoryConfig::new(config)),
        editor.clone(),
        Arc::new(StaticEnv::new()),
    );

    let resolved = service.get_config(None).await.unwrap();
    assert_eq!(resolved, json!({ "ws": "${workspaceFolder}" }));
    assert_eq!(editor.warnings(), vec!["No open workspaces"]);
}

#[tokio::test]
async fn dotted_selection_limits_the_substitution_scope() {
    let config = json!({
        "build": { "cmd": "make -C ${workspaceFolder}" },
        "lint": { "cmd": "check ${workspaceFolder}" }
    });
    let service = build_service(config, workspace_editor(), StaticEnv::new());

    let resolved = service.get_config(Some("build")).await.unwrap();
    assert_eq!(resolved, json!({ "cmd": "make -C /workspace/project" }));
}

#[tokio::test]
async fn repeated_tokens_read_the_editor_once() {
    let config = json!({
        "a": "${file}",
        "b": "${file}",
        "c": "${fileBasename}",
        "d": "${fileDirname}"
    });
    let editor = Arc::new(ScriptedEditor::closed().with_document("/workspace/project/file.ts"));
    let service = ConfigService::new(
        Arc::new(MemoryConfig::new(config)),
        editor.clone(),
        Arc::new(StaticEnv::new()),
    );

    service.get_config(None).await.unwrap();
    assert_eq!(editor.document_reads(), 1);
}

#[tokio::test]
async fn cache_does_not_cross_an_editor_change_boundary() {
    let editor = Arc::new(ScriptedEditor::closed().with_document("/workspace/a.ts"));
    let service = ConfigService::new(
        Arc::new(MemoryConfig::new(json!({ "path": "${file}" }))),
        editor.clone(),
        Arc::new(StaticEnv::new()),
    );

    assert_eq!(
        service.get_config(None).await.unwrap(),
        json!({ "path": "/workspace/a.ts" })
    );

    editor.set_document("/workspace/b.ts");
    service.invalidate();

    assert_eq!(
        service.get_config(None).await.unwrap(),
        json!({ "path": "/workspace/b.ts" })
    );
}

#[tokio::test]
async fn resolution_is_deterministic_for_a_fixed_environment() {
    let config = json!({ "path": "${workspaceFolder}/out", "line": "${lineNumber}" });
    let service = build_service(config, workspace_editor(), StaticEnv::new());

    let first = service.get_config(None).await.unwrap();
    let second = service.get_config(None).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn token_free_configuration_is_idempotent() {
    let config = json!({
        "simple": "value",
        "nested": { "number": 42, "list": [1, 2, 3] }
    });
    let service = build_service(config.clone(), workspace_editor(), StaticEnv::new());

    assert_eq!(service.get_config(None).await.unwrap(), config);
}

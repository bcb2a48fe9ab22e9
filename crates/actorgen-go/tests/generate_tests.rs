use std::fs;
use std::path::Path;

use actorgen_core::ir::GenerationModel;
use actorgen_core::{CodeGenerator, GeneratedFile, parse, transform};
use actorgen_go::{GoGenerator, GoGeneratorConfig};

const BASIC: &str = include_str!("fixtures/basic-actor.yaml");
const MULTI: &str = include_str!("fixtures/multi-actor.yaml");
const TYPE_ALIAS: &str = include_str!("fixtures/type-alias.yaml");

fn model(yaml: &str) -> GenerationModel {
    let spec = parse::from_yaml(yaml).unwrap();
    transform::transform(&spec).unwrap()
}

fn generate(yaml: &str, config: &GoGeneratorConfig) -> Vec<GeneratedFile> {
    GoGenerator.generate(&model(yaml), config).unwrap()
}

fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("missing {path}"))
}

fn write_files(root: &Path, files: &[GeneratedFile]) {
    for f in files {
        let path = root.join(&f.path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, &f.content).unwrap();
    }
}

#[test]
fn generate_default_files() {
    let files = generate(BASIC, &GoGeneratorConfig::default());
    let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["test/types.go", "test/api.go", "test/factory.go"]);
}

#[test]
fn generate_all_files() {
    let config = GoGeneratorConfig {
        generate_impl: true,
        generate_example: true,
        module_name: "example.com/actors".to_string(),
    };
    let files = generate(MULTI, &config);
    let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "calculator/types.go",
            "calculator/api.go",
            "calculator/factory.go",
            "calculator/impl.go",
            "counter/types.go",
            "counter/api.go",
            "counter/factory.go",
            "counter/impl.go",
            "main.go",
            "go.mod",
        ]
    );

    let main = file(&files, "main.go");
    assert!(main.contains("\t\"example.com/actors/calculator\"\n"));
    assert!(main.contains("\t\"example.com/actors/counter\"\n"));
    assert!(main.contains("s.RegisterActorImplFactoryContext(counter.NewActorFactory())"));

    let go_mod = file(&files, "go.mod");
    assert!(go_mod.starts_with("module example.com/actors\n"));
    assert!(go_mod.contains("github.com/dapr/go-sdk"));
}

#[test]
fn generate_api_interface() {
    let files = generate(BASIC, &GoGeneratorConfig::default());
    let expected = "\
// Package test provides the types used by the Test actor.
//
// Code generated from OpenAPI specification. DO NOT EDIT manually.
package test

import (
\t\"context\"

\t\"github.com/dapr/go-sdk/actor\"
)

// ActorTypeTest is the Dapr actor type identifier for Test.
const ActorTypeTest = \"Test\"

// TestAPI defines the interface that must be implemented to satisfy the OpenAPI schema for Test.
// It embeds actor.ServerContext so implementations can be registered with Dapr.
type TestAPI interface {
\tactor.ServerContext
\t// GetValue Get the current value
\tGetValue(ctx context.Context) (*TestState, error)
\t// SetValue Replace the stored value.
\tSetValue(ctx context.Context, request SetValueRequest) (*TestState, error)
}
";
    assert_eq!(file(&files, "test/api.go"), expected);
}

#[test]
fn generate_struct_fields() {
    let files = generate(BASIC, &GoGeneratorConfig::default());
    let types = file(&files, "test/types.go");
    assert!(types.starts_with("// Package test provides the types used by the Test actor."));
    assert!(types.contains(
        "// TestState State held by the test actor\n\
         type TestState struct {\n\
         \t// Last update timestamp\n\
         \tUpdatedAt string `json:\"updatedAt,omitempty\"`\n\
         \t// Stored value\n\
         \tValue int32 `json:\"value\"`\n\
         }\n"
    ));
    assert!(!types.contains("ActorId"));
}

#[test]
fn generate_enum_and_aliases() {
    let files = generate(TYPE_ALIAS, &GoGeneratorConfig::default());
    let types = file(&files, "user/types.go");

    assert!(types.contains("type UserStatus string"));
    for constant in [
        "UserStatusActive UserStatus = \"active\"",
        "UserStatusInactive UserStatus = \"inactive\"",
        "UserStatusSuspended UserStatus = \"suspended\"",
        "UserStatusPending UserStatus = \"pending\"",
    ] {
        assert!(types.contains(constant), "missing {constant}");
    }
    for method in [
        "func (e UserStatus) IsValid() bool",
        "func (e UserStatus) String() string",
        "func AllUserStatusValues() []UserStatus",
    ] {
        assert!(types.contains(method), "missing {method}");
    }
    assert!(types.contains("\tcase UserStatusSuspended:\n\t\treturn true\n"));

    let active = types.find("\t\tUserStatusActive,").unwrap();
    let pending = types.find("\t\tUserStatusPending,").unwrap();
    assert!(active < pending);

    assert!(types.contains("// EmailAddress Valid email address\ntype EmailAddress = string\n"));
    assert!(types.contains("type UserId = string"));
    assert!(types.contains("\tEmail EmailAddress `json:\"email\"`"));
    assert!(types.contains("\tPreferences map[string]interface{} `json:\"preferences,omitempty\"`"));

    let api = file(&files, "user/api.go");
    assert!(api.contains("\tListStatuses(ctx context.Context) ([]UserStatus, error)\n"));
}

#[test]
fn generate_factory_and_impl() {
    let config = GoGeneratorConfig {
        generate_impl: true,
        ..Default::default()
    };
    let files = generate(MULTI, &config);

    let factory = file(&files, "counter/factory.go");
    assert!(factory.contains("func NewActorFactory() func() actor.ServerContext {"));
    assert!(factory.contains("\t\timpl := &Counter{}\n"));
    assert!(factory.contains("\t\tvar _ CounterAPI = impl\n"));
    assert!(factory.contains("impl.Type() != ActorTypeCounter"));

    let stub = file(&files, "calculator/impl.go");
    assert!(stub.contains("type Calculator struct {\n\tactor.ServerImplBaseCtx\n}"));
    assert!(stub.contains(
        "// Add Add two operands\n\
         func (a *Calculator) Add(ctx context.Context, request MathOperation) (*OperationResult, error) {\n\
         \treturn nil, errors.New(\"Add method is not implemented\")\n\
         }\n"
    ));
}

#[test]
fn generated_output_is_deterministic() {
    let config = GoGeneratorConfig {
        generate_impl: true,
        generate_example: true,
        ..Default::default()
    };
    let first = generate(MULTI, &config);
    let second = generate(MULTI, &config);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.path, b.path);
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn write_generated_tree() {
    let dir = tempfile::tempdir().unwrap();
    let files = generate(MULTI, &GoGeneratorConfig::default());
    write_files(dir.path(), &files);

    for actor in ["calculator", "counter"] {
        for name in ["types.go", "api.go", "factory.go"] {
            assert!(dir.path().join(actor).join(name).is_file(), "{actor}/{name}");
        }
    }
    let shared = fs::read_to_string(dir.path().join("counter/types.go")).unwrap();
    assert!(shared.contains("type OperationLog struct {"));
    assert!(shared.contains("type LogMetadata struct {"));
    assert!(!shared.contains("type Orphan struct"));
}

#[test]
fn example_requires_module_name() {
    let config = GoGeneratorConfig {
        generate_example: true,
        module_name: "  ".to_string(),
        ..Default::default()
    };
    assert!(GoGenerator.generate(&model(BASIC), &config).is_err());
}

//! Pre-built test fixtures.
//!
//! Sources follow the layout Composer packages ship with: an opening tag,
//! a file-level docblock, one namespace and one class per file.

use serde_json::{Value, json};

/// Collection of pre-built test fixtures.
#[derive(Debug)]
pub struct Fixtures;

impl Fixtures {
    /// composer.json without an `override_files` section.
    #[must_use]
    pub fn plain_composer_json() -> Value {
        json!({
            "name": "test/project",
            "type": "project",
            "require": {
                "monolog/monolog": "^2.0"
            },
            "autoload": {
                "psr-4": {
                    "App\\": "src/"
                }
            }
        })
    }

    /// composer.json with an `override_files` section.
    #[must_use]
    pub fn override_composer_json(path: &str, generate_origin_file: bool) -> Value {
        let mut manifest = Self::plain_composer_json();
        manifest["extra"] = json!({
            "override_files": {
                "path": path,
                "generate_origin_file": generate_origin_file
            }
        });
        manifest
    }

    /// A namespaced class.
    #[must_use]
    pub fn php_class(namespace: &str, class_name: &str) -> String {
        format!(
            r"<?php

/*
 * This file is part of a test package.
 */

namespace {namespace};

class {class_name}
{{
    public function name(): string
    {{
        return '{class_name}';
    }}
}}
"
        )
    }

    /// A namespaced `final` class.
    #[must_use]
    pub fn php_final_class(namespace: &str, class_name: &str) -> String {
        Self::php_class(namespace, class_name)
            .replace(&format!("\nclass {class_name}\n"), &format!("\nfinal class {class_name}\n"))
    }

    /// A class that extends its renamed origin.
    #[must_use]
    pub fn php_override_class(namespace: &str, class_name: &str) -> String {
        format!(
            r"<?php

namespace {namespace};

class {class_name} extends Origin{class_name}
{{
    public function name(): string
    {{
        return 'overridden ' . parent::name();
    }}
}}
"
        )
    }

    /// A file with no namespace declaration.
    #[must_use]
    pub fn php_global_class(class_name: &str) -> String {
        format!("<?php\n\nclass {class_name}\n{{\n}}\n")
    }

    /// Monolog's `Logger` as shipped in `monolog/monolog` 2.x, trimmed.
    #[must_use]
    pub fn monolog_logger() -> &'static str {
        r"<?php declare(strict_types=1);

/*
 * This file is part of the Monolog package.
 *
 * (c) Jordi Boggiano <j.boggiano@seld.be>
 */

namespace Monolog;

use Monolog\Handler\HandlerInterface;
use Psr\Log\LoggerInterface;

/**
 * Monolog log channel
 */
class Logger implements LoggerInterface, ResettableInterface
{
    public const DEBUG = 100;

    protected $name;

    public function __construct(string $name, array $handlers = [])
    {
        $this->name = $name;
    }
}
"
    }
}

//! PruneCommand - prune コマンドの引数ベクタ
//!
//! 引数の順序は固定:
//! `<tool> image prune -a --force --filter=until=<image_age>`

use std::fmt;

/// PruneCommand は外部ツールに渡すコマンドライン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneCommand {
    program: String,
    image_age: String,
    args: Vec<String>,
}

impl PruneCommand {
    pub fn new(program: impl Into<String>, image_age: impl Into<String>) -> Self {
        let image_age = image_age.into();
        let args = vec![
            "image".to_string(),
            "prune".to_string(),
            "-a".to_string(),
            "--force".to_string(),
            format!("--filter=until={image_age}"),
        ];
        Self {
            program: program.into(),
            image_age,
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn image_age(&self) -> &str {
        &self.image_age
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for PruneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

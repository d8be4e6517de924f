//! ランタイム記述子
//!
//! アダプターごとの差分（作業ディレクトリ規約、サブコマンド表、検出ルール）を
//! データとして定義します。ディスパッチや検出のエンジン側はこの記述子だけを
//! 参照し、ランタイム固有の分岐を持ちません。

/// ロックファイルの存在からパッケージマネージャを判定するルール
#[derive(Debug, Clone, Copy)]
pub struct LockRule {
    pub manager: &'static str,
    pub lock_file: &'static str,
}

/// マニフェスト内の依存名からフレームワークを判定するルール
///
/// needleは引用符付きの依存キー形式（例: `"react"`）。
/// `"preact"` が react ルールを満たさないのはこの形式のため。
#[derive(Debug, Clone, Copy)]
pub struct DetectRule {
    pub framework: &'static str,
    pub needle: &'static str,
}

/// フレームワーク固有のコンソールスクリプトによる判定
///
/// フォルダ直下の特徴的ファイルの存在を確認し、マニフェスト内の
/// 依存名で近縁バリアントを見分ける。マニフェストルールより優先。
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProbe {
    /// フォルダ直下の特徴的ファイル（例: artisan）
    pub script: &'static str,
    /// バリアント判定に使うマニフェスト内の依存名
    pub variant_needle: &'static str,
    /// variant_needleがマッチした場合のフレームワーク
    pub variant: &'static str,
    /// マッチしなかった場合のフレームワーク
    pub framework: &'static str,
}

/// アダプターが受け付けるサブコマンド定義
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    /// コンテナ内で実行するプログラム（argvの先頭部分）
    pub program: &'static [&'static str],
    /// 実行に必要なフレームワーク（ゲート対象のみ）
    pub requires_framework: Option<&'static str>,
}

/// ランタイムファミリごとのアダプター記述子
#[derive(Debug)]
pub struct RuntimeDescriptor {
    /// ランタイム識別子のプレフィックス（"node-18" は "node" にマッチ）
    pub family: &'static str,
    /// アダプターのバイナリ名
    pub adapter: &'static str,
    /// コンテナ内の作業ディレクトリ規約
    pub workdir: &'static str,
    /// 依存マニフェストのファイル名
    pub manifest: &'static str,
    /// ロックファイル判定ルール（優先順）
    pub lock_rules: &'static [LockRule],
    /// どのロックファイルも無い場合のデフォルト
    pub default_manager: &'static str,
    /// フレームワーク判定ルール（優先順）
    pub framework_rules: &'static [DetectRule],
    /// コンソールスクリプトによる判定
    pub console_probe: Option<ConsoleProbe>,
    /// 受け付けるサブコマンド
    pub commands: &'static [CommandSpec],
}

impl RuntimeDescriptor {
    /// サブコマンド定義を検索
    pub fn find_command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// サブコマンド名の一覧（エラー表示用）
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }
}

/// Node.js系アダプター
pub static NODE: RuntimeDescriptor = RuntimeDescriptor {
    family: "node",
    adapter: "fleet-node",
    workdir: "/usr/src/app",
    manifest: "package.json",
    lock_rules: &[
        LockRule {
            manager: "npm",
            lock_file: "package-lock.json",
        },
        LockRule {
            manager: "yarn",
            lock_file: "yarn.lock",
        },
        LockRule {
            manager: "pnpm",
            lock_file: "pnpm-lock.yaml",
        },
    ],
    default_manager: "npm",
    framework_rules: &[
        DetectRule {
            framework: "next",
            needle: "\"next\"",
        },
        DetectRule {
            framework: "nuxt",
            needle: "\"nuxt\"",
        },
        DetectRule {
            framework: "angular",
            needle: "\"@angular/core\"",
        },
        DetectRule {
            framework: "express",
            needle: "\"express\"",
        },
        DetectRule {
            framework: "react",
            needle: "\"react\"",
        },
        DetectRule {
            framework: "vue",
            needle: "\"vue\"",
        },
    ],
    console_probe: None,
    commands: &[
        CommandSpec {
            name: "node",
            program: &["node"],
            requires_framework: None,
        },
        CommandSpec {
            name: "npm",
            program: &["npm"],
            requires_framework: None,
        },
        CommandSpec {
            name: "npx",
            program: &["npx"],
            requires_framework: None,
        },
        CommandSpec {
            name: "yarn",
            program: &["yarn"],
            requires_framework: None,
        },
        CommandSpec {
            name: "pnpm",
            program: &["pnpm"],
            requires_framework: None,
        },
    ],
};

/// PHP系アダプター
pub static PHP: RuntimeDescriptor = RuntimeDescriptor {
    family: "php",
    adapter: "fleet-php",
    workdir: "/var/www/html",
    manifest: "composer.json",
    lock_rules: &[LockRule {
        manager: "composer",
        lock_file: "composer.lock",
    }],
    default_manager: "composer",
    framework_rules: &[
        DetectRule {
            framework: "lumen",
            needle: "laravel/lumen",
        },
        DetectRule {
            framework: "laravel",
            needle: "laravel/framework",
        },
        DetectRule {
            framework: "symfony",
            needle: "symfony/framework-bundle",
        },
        DetectRule {
            framework: "cakephp",
            needle: "cakephp/cakephp",
        },
    ],
    console_probe: Some(ConsoleProbe {
        script: "artisan",
        variant_needle: "laravel/lumen",
        variant: "lumen",
        framework: "laravel",
    }),
    commands: &[
        CommandSpec {
            name: "php",
            program: &["php"],
            requires_framework: None,
        },
        CommandSpec {
            name: "composer",
            program: &["composer"],
            requires_framework: None,
        },
        CommandSpec {
            name: "artisan",
            program: &["php", "artisan"],
            requires_framework: Some("laravel"),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        let npm = NODE.find_command("npm").unwrap();
        assert_eq!(npm.program, &["npm"]);
        assert!(npm.requires_framework.is_none());

        assert!(NODE.find_command("composer").is_none());
    }

    #[test]
    fn test_artisan_is_gated_and_mapped() {
        // artisanはphp artisanにマップされ、laravelゲートが付く
        let artisan = PHP.find_command("artisan").unwrap();
        assert_eq!(artisan.program, &["php", "artisan"]);
        assert_eq!(artisan.requires_framework, Some("laravel"));
    }

    #[test]
    fn test_workdir_conventions_differ_per_family() {
        assert_eq!(NODE.workdir, "/usr/src/app");
        assert_eq!(PHP.workdir, "/var/www/html");
    }

    #[test]
    fn test_command_names() {
        assert_eq!(NODE.command_names(), vec!["node", "npm", "npx", "yarn", "pnpm"]);
        assert_eq!(PHP.command_names(), vec!["php", "composer", "artisan"]);
    }
}

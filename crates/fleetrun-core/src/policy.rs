//! インタラクティブ判定
//!
//! execに疑似端末（-it）を要求するかどうかを決定します。
//! パイプやCIからの呼び出しで端末要求のままハングしないよう、
//! stdinが端末でない場合と情報系コマンドでは要求しません。

/// 端末を必要としない「情報系」トークン
///
/// バージョン・ヘルプ・一覧系の問い合わせが対象。
pub const INFORMATIONAL_TOKENS: [&str; 9] = [
    "--version",
    "-v",
    "-V",
    "version",
    "--help",
    "-h",
    "help",
    "list",
    "about",
];

/// サブコマンドの先頭引数が情報系かどうか
pub fn is_informational(first_arg: Option<&str>) -> bool {
    match first_arg {
        Some(arg) => INFORMATIONAL_TOKENS.contains(&arg),
        None => false,
    }
}

/// 疑似端末（-it）を要求するかどうか
///
/// 呼び出し元のstdinが端末であり、かつ情報系コマンドでない場合のみtrue。
pub fn should_allocate_tty(stdin_is_terminal: bool, args: &[String]) -> bool {
    stdin_is_terminal && !is_informational(args.first().map(|s| s.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_informational_tokens() {
        assert!(is_informational(Some("--version")));
        assert!(is_informational(Some("-v")));
        assert!(is_informational(Some("help")));
        assert!(is_informational(Some("list")));
        assert!(!is_informational(Some("install")));
        assert!(!is_informational(None));
    }

    #[test]
    fn test_no_tty_without_terminal_stdin() {
        // stdinが端末でなければ、対話的なコマンドでも要求しない
        assert!(!should_allocate_tty(false, &args(&["install"])));
        assert!(!should_allocate_tty(false, &args(&[])));
    }

    #[test]
    fn test_no_tty_for_informational_commands() {
        assert!(!should_allocate_tty(true, &args(&["--version"])));
        assert!(!should_allocate_tty(true, &args(&["help", "install"])));
    }

    #[test]
    fn test_tty_for_interactive_commands_on_terminal() {
        assert!(should_allocate_tty(true, &args(&["install"])));
        // 引数なし（REPL等）も対話的とみなす
        assert!(should_allocate_tty(true, &args(&[])));
    }

    #[test]
    fn test_only_first_argument_is_considered() {
        // 2番目以降に情報系トークンがあっても無関係
        assert!(should_allocate_tty(true, &args(&["install", "--help"])));
    }
}

//! 共通CLIエンジン
//!
//! 各アダプターはRuntimeDescriptorを渡すだけで、引数解析からexec呼び出し
//! までの流れを共有します。アダプター間の差分はすべて記述子側にあります。

use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use fleetrun_core::{ResolvedService, RuntimeDescriptor, should_allocate_tty};
use std::io::IsTerminal;
use tracing::debug;

#[derive(Parser)]
struct Cli {
    /// 対象サービス名（複数マッチ時の選択に使用）
    #[arg(long, env = "FLEET_SERVICE")]
    service: Option<String>,

    /// コンテナ内で実行するサブコマンド
    sub_command: String,

    /// サブコマンドに渡す引数
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// アダプター名と説明を反映したclapコマンドを構築
fn build_command(rt: &RuntimeDescriptor) -> clap::Command {
    Cli::command()
        .name(rt.adapter)
        .version(env!("CARGO_PKG_VERSION"))
        .about(format!(
            "サービスコンテナ内で {} 系ツールを実行するアダプター（対応サブコマンド: {}）",
            rt.family,
            rt.command_names().join(", ")
        ))
}

/// アダプターのエントリポイント
///
/// 終了コードを返す。アダプター自身のエラーは1、外部コマンドが
/// 非ゼロで終了した場合はそのコードをそのまま返す。
pub fn run(rt: &RuntimeDescriptor) -> i32 {
    match try_run(rt) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            1
        }
    }
}

fn try_run(rt: &RuntimeDescriptor) -> anyhow::Result<i32> {
    // --help / --version はclapがここで処理して終了する
    let matches = build_command(rt).get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let cwd = std::env::current_dir()?;
    let config = fleetrun_core::load_config(&cwd)?;
    let services = fleetrun_core::resolve_services(&config, rt, &cwd)?;
    let service = select_service(services, cli.service.as_deref())?;

    let Some(spec) = rt.find_command(&cli.sub_command) else {
        eprintln!(
            "{} 不明なサブコマンドです: '{}'（利用可能: {}）",
            "✗".red().bold(),
            cli.sub_command,
            rt.command_names().join(", ")
        );
        eprintln!();
        eprintln!("{}", build_command(rt).render_usage());
        return Ok(1);
    };

    let interactive = should_allocate_tty(std::io::stdin().is_terminal(), &cli.args);
    debug!(
        service = %service.name,
        container = %service.container,
        command = %cli.sub_command,
        interactive,
        "Dispatching"
    );
    println!(
        "{}",
        format!("コンテナ '{}' でコマンドを実行中...", service.container).green()
    );

    let code = fleetrun_container::dispatch(rt, &service, spec, &cli.args, interactive)?;
    Ok(code)
}

/// 解決済みサービスから対象を1つ選択
///
/// --service指定が無ければ先頭を使用する。複数マッチ時は警告だけ出して
/// 続行する（エラーにはしない）。
fn select_service(
    services: Vec<ResolvedService>,
    requested: Option<&str>,
) -> anyhow::Result<ResolvedService> {
    if let Some(name) = requested {
        return services.iter().find(|s| s.name == name).cloned().ok_or_else(|| {
            anyhow::anyhow!(
                "サービス '{}' が見つかりません\n利用可能なサービス: {}",
                name,
                services
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        });
    }

    if services.len() > 1 {
        eprintln!(
            "{}",
            format!(
                "⚠ 複数のサービスがマッチしました。'{}' を使用します（--service で指定できます）",
                services[0].name
            )
            .yellow()
        );
    }

    services
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("対象のサービスがありません"))
}

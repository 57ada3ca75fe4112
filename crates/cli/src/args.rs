// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};
use encoding_rs::Encoding;

use crate::options::{OutputFormat, SortSpec};
use crate::parsers::{
    SizeArg, parse_encoding, parse_key_val, parse_positive_usize, parse_usize_1_to_512,
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_tokens",
    version = crate::VERSION,
    about = "ソースコードのトークン数集計ツール"
)]
pub struct Args {
    /// 対象フォルダ
    #[arg(default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// 対象拡張子 (例: .java .cs)。省略時は登録済みの全拡張子
    pub extensions: Vec<String>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanArgs {
    /// 隠しファイルも対象
    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    /// .gitignore を無視して巡回
    #[arg(long, help_heading = "走査/入力")]
    pub no_gitignore: bool,

    /// シンボリックリンクを辿る
    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    /// ディレクトリ探索の最大深さ
    #[arg(long = "max-depth", help_heading = "走査/入力")]
    pub max_depth: Option<usize>,

    /// ファイル探索に使うスレッド数（1..=512）
    #[arg(long = "walk-threads", value_parser = parse_usize_1_to_512, help_heading = "走査/入力")]
    pub walk_threads: Option<usize>,

    /// 並列数（1..=512）
    #[arg(long, short = 'j', value_parser = parse_usize_1_to_512, help_heading = "走査/入力")]
    pub jobs: Option<usize>,

    /// 無視リストで再包含するパターン（gitignore 互換、カンマ区切り/複数指定可）
    #[arg(long = "override-include", value_delimiter = ',', help_heading = "走査/入力")]
    pub override_include: Vec<String>,

    /// 無視リストで追加除外するパターン（gitignore 互換、カンマ区切り/複数指定可）
    #[arg(long = "override-exclude", value_delimiter = ',', help_heading = "走査/入力")]
    pub override_exclude: Vec<String>,

    /// 入力の末尾に接するトークンを数えない従来の判定
    #[arg(long, help_heading = "走査/入力")]
    pub compat: bool,

    /// ソースの文字コード (例: shift_jis)。既定は UTF-8、BOM があればそちらを優先
    #[arg(long, value_parser = parse_encoding, help_heading = "走査/入力")]
    pub encoding: Option<&'static Encoding>,
}

#[derive(ClapArgs, Debug)]
pub struct FilterArgs {
    /// 拡張子フィルタ（カンマ区切り/複数指定可, 例: --ext java,cs）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ext: Vec<String>,

    /// 最小ファイルサイズ (例: 10K, 5MiB)
    #[arg(long, help_heading = "フィルタ")]
    pub min_size: Option<SizeArg>,

    /// 最大ファイルサイズ (例: 10K, 5MiB)
    #[arg(long, help_heading = "フィルタ")]
    pub max_size: Option<SizeArg>,

    /// 拡張子の読み替え（例: --map-ext cs=java）
    #[arg(long = "map-ext", value_parser = parse_key_val, help_heading = "フィルタ")]
    pub map_ext: Vec<(String, String)>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputArgs {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// ソートキー（複数可, 例: tokens:desc,name）
    #[arg(long, help_heading = "出力")]
    pub sort: Option<SortSpec>,

    /// 上位N件のみ表示
    #[arg(long, value_parser = parse_positive_usize, help_heading = "出力")]
    pub top: Option<usize>,

    /// 各トークンを `TYPE: token` 形式で表示
    #[arg(long, help_heading = "出力")]
    pub show_tokens: bool,

    /// 合計のみ表示
    #[arg(long, help_heading = "出力")]
    pub total_only: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorArgs {
    /// 読み込みエラーで即座に失敗する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// デバッグログを出力
    #[arg(long, short = 'v', help_heading = "動作")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SortKey;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_folder_then_extensions() {
        let args = Args::parse_from(["count_tokens", "src", ".java", ".cs"]);
        assert_eq!(args.root, PathBuf::from("src"));
        assert_eq!(args.extensions, vec![".java", ".cs"]);
        assert!(args.output.sort.is_none());
        assert_eq!(args.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_defaults_to_current_dir() {
        let args = Args::parse_from(["count_tokens"]);
        assert_eq!(args.root, PathBuf::from("."));
        assert!(args.extensions.is_empty());
        assert!(!args.scan.compat);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "count_tokens",
            "--compat",
            "--map-ext",
            "cs=java",
            "--sort",
            "tokens:desc",
            "--max-size",
            "1K",
            "--format",
            "json",
            ".",
        ]);
        assert!(args.scan.compat);
        assert_eq!(args.filter.map_ext, vec![(String::from("cs"), String::from("java"))]);
        assert_eq!(args.output.sort.unwrap().0, vec![(SortKey::Tokens, true)]);
        assert_eq!(args.filter.max_size.map(|s| s.0), Some(1024));
        assert_eq!(args.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_encoding_label() {
        let args = Args::parse_from(["count_tokens", "--encoding", "shift_jis"]);
        assert_eq!(args.scan.encoding, Some(encoding_rs::SHIFT_JIS));
        assert!(Args::try_parse_from(["count_tokens", "--encoding", "klingon"]).is_err());
    }

    #[test]
    fn test_jobs_out_of_range() {
        assert!(Args::try_parse_from(["count_tokens", "--jobs", "0"]).is_err());
        assert!(Args::try_parse_from(["count_tokens", "--jobs", "513"]).is_err());
    }
}

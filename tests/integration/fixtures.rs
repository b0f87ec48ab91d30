// Known documents and their expected text rendering
// WHY: Golden-file testing requires deterministic input/output pairs for validation

/// A short notice touching every rule
pub const NOTICE_TEXT: &str = "子供達の参加費は3万円です。\n定員は１２名、予備枠は5名です。\n詳しい事は後日お知らせ下さい。";

/// Expected text rendering of NOTICE_TEXT with the built-in rules and default markers
pub const NOTICE_EXPECTED: &str = "### ハイライト結果
<mark>子供</mark><mark>達</mark>の参加費は3万円です。
定員は１２名、予備枠は5名です。
詳しい<mark>事</mark>は後日お知らせ<mark>下さい</mark>。

### 該当表記一覧
| 間違い | 正しい表記 |
|---|---|
| 下さい | ください |
| 事 | こと |
| 子供 | 子ども |
| 達 | たち |

### 数字ルールの指摘
- 1桁の数字「3」は全角が望ましいです。
- 2桁以上の数字「１２」は半角が望ましいです。
- 1桁の数字「5」は全角が望ましいです。
- 「3万」は漢数字での表記（例：三万）が望ましいです。

### 注意が必要な語
- 『事』が含まれています：『自分事』『出来事』などは例外の可能性があります。
";

/// Clean text: no variants, no digits
pub const CLEAN_TEXT: &str = "本日は晴天なり。";

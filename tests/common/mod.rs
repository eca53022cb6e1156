// tests/common/mod.rs
//
// Page builders shaped like the real sources, small enough to read in a failure.
//
#![allow(dead_code)]

/// irasuto-style page: a navigation table first, then the dex table.
pub fn irasuto_page(rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (no, name) in rows {
        body.push_str(&format!(
            "<tr>\n  <td class=\"no\">{no}</td>\n  <td><a href=\"#\">{name}</a></td>\n  <td><img src=\"x.png\"></td>\n</tr>\n"
        ));
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="ja"><head><meta charset="utf-8"><title>ポケモン一覧</title>
<script>document.write("<table><tr><th>図鑑No</th><th>ポケモン名</th></tr></table>");</script>
</head><body>
<table class="nav"><tr><th>メニュー</th><th>リンク</th></tr><tr><td>1</td><td>トップ</td></tr></table>
<table class="list">
<thead><tr><th>図鑑No</th><th>ポケモン名</th><th>画像</th></tr></thead>
<tbody>
{body}</tbody>
</table>
</body></html>"#
    )
}

/// gamewith-style page covering `ids`: even ids in one text node
/// ("No.002 name"), odd ids with the name in a sibling element.
pub fn gamewith_page(ids: impl IntoIterator<Item = u32>) -> String {
    let mut body = String::new();
    for id in ids {
        if id % 2 == 0 {
            body.push_str(&format!("<li>No.{id:03} ポケ{id}</li>\n"));
        } else {
            body.push_str(&format!("<li>No.{id:03} <a>ポケ{id}</a></li>\n"));
        }
    }
    format!(
        r#"<html><body><h2>ポケモン図鑑一覧</h2>
<p>No.とポケモン名の一覧です。</p>
<ul>
{body}</ul>
<script>var ad = "No.0001 広告";</script>
</body></html>"#
    )
}

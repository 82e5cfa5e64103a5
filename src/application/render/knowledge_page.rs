// src/application/render/knowledge_page.rs
//! The `legal-knowledge.html` landing page: search box, per-category
//! navigation and one card grid per category.

use crate::domain::category::CategoryTable;
use crate::domain::html::escape;
use chrono::NaiveDate;

/// One article card on the knowledge page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

const SEARCH_SECTION: &str = r#"
            <div class="bg-primary-dark text-white p-8 mb-12">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-2xl font-bold mb-4">搜尋法律知識</h2>
                    <p class="text-gray-200 mb-6">快速找到您需要的法律資訊</p>
                    <div class="max-w-md mx-auto">
                        <div class="flex">
                            <input type="text" id="article-search" placeholder="請輸入關鍵字..."
                                   class="flex-1 px-4 py-3 text-gray-900 border-0 focus:outline-none">
                            <button onclick="searchArticles()"
                                    class="bg-accent-gold text-primary-dark px-6 py-3 font-medium hover:bg-yellow-400 transition-colors">
                                搜尋
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <script>
            function searchArticles() {
                const query = document.getElementById('article-search').value.toLowerCase();
                const articles = document.querySelectorAll('[data-article]');
                articles.forEach(article => {
                    const title = article.querySelector('h3').textContent.toLowerCase();
                    const desc = article.querySelector('p').textContent.toLowerCase();
                    if (title.includes(query) || desc.includes(query)) {
                        article.style.display = 'block';
                    } else {
                        article.style.display = query ? 'none' : 'block';
                    }
                });
            }
            document.getElementById('article-search').addEventListener('input', searchArticles);
            </script>"#;

/// Group entries by category in table order (unknown categories last, in
/// order of appearance), newest first within a group.
fn group<'a>(
    entries: &'a [KnowledgeEntry],
    categories: &CategoryTable,
) -> Vec<(String, Vec<&'a KnowledgeEntry>)> {
    let mut groups: Vec<(String, Vec<&KnowledgeEntry>)> = categories
        .iter()
        .map(|c| (c.key.clone(), Vec::new()))
        .collect();
    for entry in entries {
        match groups.iter_mut().find(|(key, _)| *key == entry.category) {
            Some((_, items)) => items.push(entry),
            None => groups.push((entry.category.clone(), vec![entry])),
        }
    }
    groups.retain(|(_, items)| !items.is_empty());
    for (_, items) in &mut groups {
        items.sort_by(|a, b| b.date.cmp(&a.date));
    }
    groups
}

fn article_card(entry: &KnowledgeEntry, categories: &CategoryTable) -> String {
    let href = escape(&entry.filename);
    format!(
        r#"
            <div data-article class="bg-white p-6 border border-gray-200 hover:shadow-lg transition-shadow duration-300">
                <div class="mb-3">
                    <span class="inline-block bg-accent-gold text-primary-dark px-3 py-1 text-sm font-medium rounded">
                        {label}
                    </span>
                </div>
                <h3 class="text-xl font-bold text-primary-dark mb-3 hover:text-accent-gold">
                    <a href="{href}" class="block">{title}</a>
                </h3>
                <p class="text-gray-600 mb-4 line-clamp-3">{description}</p>
                <div class="flex justify-between items-center">
                    <span class="text-sm text-gray-500">{date}</span>
                    <a href="{href}" class="text-accent-gold hover:text-yellow-600 font-medium">
                        閱讀更多 →
                    </a>
                </div>
            </div>"#,
        label = escape(categories.display_name(&entry.category)),
        title = escape(&entry.title),
        description = escape(&entry.description),
        date = entry.date.format("%Y-%m-%d"),
    )
}

fn category_section(
    key: &str,
    items: &[&KnowledgeEntry],
    categories: &CategoryTable,
) -> String {
    let cards: String = items.iter().map(|e| article_card(e, categories)).collect();
    format!(
        r#"
            <section id="{key}" class="mb-16">
                <div class="flex items-center mb-8">
                    <h2 class="text-3xl font-bold text-primary-dark mr-4">{title}</h2>
                    <span class="bg-accent-gold text-primary-dark px-3 py-1 rounded-full text-sm font-medium">
                        {count} 篇文章
                    </span>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {cards}
                </div>
            </section>"#,
        key = escape(key),
        title = escape(categories.display_name(key)),
        count = items.len(),
    )
}

fn navigation(groups: &[(String, Vec<&KnowledgeEntry>)], categories: &CategoryTable) -> String {
    let items: String = groups
        .iter()
        .map(|(key, items)| {
            format!(
                r##"
                <a href="#{key}" class="flex items-center justify-between p-4 bg-white border border-gray-200 hover:bg-gray-50 transition-colors duration-300">
                    <span class="font-medium text-primary-dark">{title}</span>
                    <span class="bg-accent-gold text-primary-dark px-2 py-1 rounded text-sm">{count}</span>
                </a>"##,
                key = escape(key),
                title = escape(categories.display_name(key)),
                count = items.len(),
            )
        })
        .collect();
    format!(
        r#"
            <div class="bg-gray-50 p-8 mb-12">
                <h2 class="text-2xl font-bold text-primary-dark mb-6 text-center">法律知識分類</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                    {items}
                </div>
            </div>"#
    )
}

pub fn render_knowledge_page(entries: &[KnowledgeEntry], categories: &CategoryTable) -> String {
    let groups = group(entries, categories);
    let nav = navigation(&groups, categories);
    let sections: String = groups
        .iter()
        .map(|(key, items)| category_section(key, items, categories))
        .collect();
    let total = entries.len();

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-TW">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>法律知識庫 - 不動產繼承法律880</title>
    <meta name="description" content="專業法律知識庫，提供遺產繼承、不動產、家事法等各領域法律文章，由專業律師團隊撰寫">
    <link rel="icon" type="image/png" href="https://raw.githubusercontent.com/lawyerannweb-arch/pic/main/logo_2.ico">
    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {{
            theme: {{
                extend: {{
                    colors: {{
                        'primary-dark': '#001B2F',
                        'accent-gold': '#CDAB78',
                        'neutral-gray': '#8A97A0',
                        'text-light': '#F8F9FA'
                    }}
                }}
            }}
        }}
    </script>
</head>
<body class="bg-white text-gray-900">
    <nav class="sticky top-0 w-full z-50 bg-primary-dark shadow-lg">
        <div class="max-w-7xl mx-auto px-6 py-4">
            <div class="flex justify-between items-center">
                <div class="text-2xl font-bold text-white">
                    <a href="index.html">不動產繼承法律880</a>
                </div>
                <div class="hidden lg:flex space-x-8">
                    <a href="index.html" class="text-white hover:text-accent-gold transition-colors duration-300 font-medium">首頁</a>
                    <a href="service-process.html" class="text-white hover:text-accent-gold transition-colors duration-300 font-medium">服務項目</a>
                    <a href="team.html" class="text-white hover:text-accent-gold transition-colors duration-300 font-medium">專業團隊</a>
                    <a href="cases.html" class="text-white hover:text-accent-gold transition-colors duration-300 font-medium">成功案例</a>
                    <a href="pricing.html" class="text-white hover:text-accent-gold transition-colors duration-300 font-medium">收費標準</a>
                    <a href="legal-knowledge.html" class="text-accent-gold font-medium">法律知識</a>
                    <a href="index.html#contact" class="text-white hover:text-accent-gold transition-colors duration-300 font-medium">聯絡我們</a>
                </div>
            </div>
        </div>
    </nav>

    <section class="py-16 bg-gradient-to-r from-primary-dark to-blue-900 text-white">
        <div class="max-w-4xl mx-auto px-6 text-center">
            <h1 class="text-4xl lg:text-5xl font-bold mb-6">法律知識庫</h1>
            <p class="text-xl text-gray-200 mb-4">專業律師團隊為您精心整理的法律知識</p>
            <p class="text-lg text-gray-300">目前共有 {total} 篇專業文章</p>
        </div>
    </section>
{SEARCH_SECTION}
{nav}

    <main class="py-12">
        <div class="max-w-6xl mx-auto px-6">
            {sections}
        </div>
    </main>

    <footer class="bg-gray-900 text-white py-12">
        <div class="max-w-6xl mx-auto px-6 text-center">
            <div class="text-2xl font-bold mb-4">不動產繼承法律880</div>
            <p class="text-gray-400">專業、可靠的法律服務，守護您的權益</p>
        </div>
    </footer>

    <style>
        .line-clamp-3 {{
            display: -webkit-box;
            -webkit-line-clamp: 3;
            -webkit-box-orient: vertical;
            overflow: hidden;
        }}
    </style>
</body>
</html>
"#
    )
}

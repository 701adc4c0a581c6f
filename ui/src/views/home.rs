//! Gallery index: every template as a card, filterable by category.

use dioxus::prelude::*;

use crate::components::template_nav::template_link;
use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::gallery::{filter_entries, Category, CategoryFilter, GALLERY};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full(
    "Template gallery",
    "템플릿 갤러리",
    "模板图库",
    "テンプレートギャラリー",
);

const HERO_TITLE: Tr = Tr::full(
    "Nine decorative pages, one small toolkit.",
    "아홉 개의 장식적인 페이지, 하나의 작은 툴킷.",
    "九个装饰页面，一个小工具箱。",
    "9つの装飾ページ、1つの小さなツールキット。",
);

const HERO_LEDE: Tr = Tr::full(
    "Each template is a self-contained page built from the same reveal-on-scroll sections and per-string translation tables. Pick a category or browse them all.",
    "각 템플릿은 동일한 스크롤 리빌 섹션과 문자열별 번역 테이블로 만든 독립적인 페이지입니다. 카테고리를 고르거나 전체를 둘러보세요.",
    "每个模板都是一个独立页面，由相同的滚动渐显区块和逐句翻译表构成。选择一个类别，或全部浏览。",
    "各テンプレートは、同じスクロールリビールセクションと文字列ごとの翻訳テーブルで作られた独立したページです。カテゴリーを選ぶか、すべてをご覧ください。",
);

const ALL_LABEL: Tr = Tr::full("All", "전체", "全部", "すべて");

#[component]
pub fn Home() -> Element {
    let active = use_i18n()();
    let mut filter = use_signal(CategoryFilter::default);

    let current = filter();
    let entries = filter_entries(&GALLERY, current);

    let all_class = if current == CategoryFilter::All {
        "chip chip--active"
    } else {
        "chip"
    };

    rsx! {
        div { class: "template template--index",
            TemplateNav { brand: "Vitrine", show_back: false }

            header { class: "hero hero--index",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            nav { class: "filters", aria_label: "Template categories",
                button {
                    class: all_class,
                    onclick: move |_| filter.set(CategoryFilter::All),
                    {ALL_LABEL.resolve(active)}
                }
                { Category::ALL.iter().map(|category| {
                    let category = *category;
                    let chip_class = if current == CategoryFilter::Only(category) {
                        "chip chip--active"
                    } else {
                        "chip"
                    };
                    rsx! {
                        button {
                            key: "{category:?}",
                            class: chip_class,
                            onclick: move |_| filter.set(CategoryFilter::Only(category)),
                            {category.label().resolve(active)}
                        }
                    }
                })}
            }

            section { class: "gallery",
                { entries.iter().enumerate().map(|(i, entry)| {
                    let card = rsx! {
                        article { class: "card {entry.accent}",
                            div { class: "card__swatch", aria_hidden: "true" }
                            h2 { class: "card__name", "{entry.name}" }
                            p { class: "card__tagline", {entry.tagline.resolve(active)} }
                            ul { class: "card__tags",
                                { entry.categories.iter().map(|category| rsx! {
                                    li { key: "{category:?}", {category.label().resolve(active)} }
                                })}
                            }
                        }
                    };
                    rsx! {
                        Reveal {
                            key: "{entry.slug}",
                            delay_ms: (i as u32 % 3) * 70,
                            margin_px: -40,
                            {template_link(entry.slug, card)}
                        }
                    }
                })}
            }

            Footer {}
        }
    }
}

//! "The Ledger Review": editorial magazine template.
//! Masthead hero, featured articles, columns, and a subscribe note.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{Article, Feature};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Issue 14 — Autumn", "제14호 — 가을", "第 14 期 — 秋季", "第14号 — 秋");

const HERO_TITLE: Tr = Tr::full(
    "Slow reporting on fast money.",
    "빠른 돈에 대한 느린 보도.",
    "以慢笔写快钱。",
    "速い金を、遅い筆で。",
);

const HERO_LEDE: Tr = Tr::full(
    "A quarterly on markets and the people who lose sleep over them. Printed on paper that survives a coat pocket.",
    "시장과 그 때문에 잠 못 드는 사람들에 관한 계간지. 코트 주머니에서도 버티는 종이에 인쇄합니다.",
    "一本关于市场、以及为市场失眠之人的季刊。印在经得起大衣口袋折腾的纸上。",
    "マーケットと、そのために眠れない人々についての季刊誌。コートのポケットに耐える紙に刷っています。",
);

const FEATURED_TITLE: Tr = Tr::full("In this issue", "이번 호", "本期内容", "今号の特集");
const COLUMNS_TITLE: Tr = Tr::full("Columns", "칼럼", "专栏", "コラム");
const SUBSCRIBE_TITLE: Tr = Tr::full("Subscribe", "구독", "订阅", "定期購読");

const SUBSCRIBE_BODY: Tr = Tr::full(
    "Four issues a year, posted flat, never folded. Digital access included for reading on trains with bad light.",
    "연 4회, 접지 않고 평평하게 발송합니다. 조명이 나쁜 기차 안을 위한 디지털 열람 포함.",
    "每年四期，平寄不折。附数字版，供光线糟糕的火车上阅读。",
    "年4回、折らずに平らなままお届け。明かりの悪い列車内のためのデジタル版付き。",
);

const SUBSCRIBE_CTA: Tr = Tr::full("Start with issue 14", "제14호부터 시작하기", "从第 14 期开始", "第14号から始める");

static FEATURED: [Article; 3] = [
    Article {
        title: Tr::full(
            "The harbor that shorted itself",
            "스스로를 공매도한 항구",
            "做空自己的港口",
            "自らを空売りした港",
        ),
        author: "Ines Abadi",
        rubric: Tr::full("Feature", "피처", "特稿", "特集"),
    },
    Article {
        title: Tr::full(
            "Four accountants and a volcano",
            "회계사 네 명과 화산 하나",
            "四位会计师与一座火山",
            "4人の会計士と1つの火山",
        ),
        author: "Tomas Keller",
        rubric: Tr::full("Reportage", "르포르타주", "报道", "ルポルタージュ"),
    },
    Article {
        title: Tr::full(
            "What the vending machines knew",
            "자판기가 알고 있던 것",
            "自动售货机早就知道的事",
            "自動販売機が知っていたこと",
        ),
        author: "Priya Raman",
        rubric: Tr::full("Essay", "에세이", "随笔", "エッセイ"),
    },
];

static COLUMNS: [Feature; 3] = [
    Feature {
        title: Tr::full("Margin notes", "여백의 메모", "页边批注", "欄外のメモ"),
        body: Tr::full(
            "Short readings of long filings.",
            "긴 공시에 대한 짧은 독해.",
            "长篇披露的短评。",
            "長い開示資料の短い読解。",
        ),
    },
    Feature {
        title: Tr::full("The float", "플로트", "浮存金", "フロート"),
        body: Tr::full(
            "Where idle money goes to wait.",
            "놀고 있는 돈이 기다리는 곳.",
            "闲钱在哪里排队等候。",
            "遊んでいる金が待つ場所。",
        ),
    },
    Feature {
        title: Tr::full("Closing prices", "종가", "收盘价", "終値"),
        body: Tr::full(
            "An obituary column for delisted tickers.",
            "상장폐지된 티커를 위한 부고란.",
            "为退市代码而写的讣告专栏。",
            "上場廃止ティッカーのための追悼欄。",
        ),
    },
];

#[component]
pub fn Magazine() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--magazine",
            TemplateNav { brand: "The Ledger Review", accent: "accent-oxblood" }

            header { class: "hero hero--masthead",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {FEATURED_TITLE.resolve(active)} }
                }
                { FEATURED.iter().enumerate().map(|(i, article)| rsx! {
                    Reveal {
                        key: "{article.author}",
                        delay_ms: (i as u32) * 80,
                        margin_px: -40,
                        article { class: "row row--article",
                            p { class: "row__rubric", {article.rubric.resolve(active)} }
                            h3 { class: "row__title", {article.title.resolve(active)} }
                            p { class: "row__meta", "{article.author}" }
                        }
                    }
                })}
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {COLUMNS_TITLE.resolve(active)} }
                }
                div { class: "grid grid--three",
                    { COLUMNS.iter().enumerate().map(|(i, column)| rsx! {
                        Reveal {
                            key: "{column.title.en}",
                            delay_ms: (i as u32) * 90,
                            margin_px: -40,
                            article { class: "panel",
                                h3 { class: "panel__title", {column.title.resolve(active)} }
                                p { class: "panel__body", {column.body.resolve(active)} }
                            }
                        }
                    })}
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {SUBSCRIBE_TITLE.resolve(active)} }
                    p { class: "section__body", {SUBSCRIBE_BODY.resolve(active)} }
                    span { class: "cta__button", {SUBSCRIBE_CTA.resolve(active)} }
                }
            }

            Footer {}
        }
    }
}

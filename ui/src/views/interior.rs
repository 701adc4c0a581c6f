//! "Form & Field": interior design studio template.
//! Hero, projects, the studio's process, and press mentions.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{Award, Feature, Project};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Interiors", "인테리어", "室内设计", "インテリア");

const HERO_TITLE: Tr = Tr::full(
    "Rooms that work before they photograph.",
    "사진보다 먼저 제 역할을 하는 공간.",
    "先好用，再上镜的房间。",
    "写真映えの前に、まず機能する部屋。",
);

const HERO_LEDE: Tr = Tr::full(
    "We plan homes and small hotels around how mornings actually go: where the coffee is, where the coats land, where the light falls at seven.",
    "우리는 아침이 실제로 흘러가는 방식에 맞춰 집과 작은 호텔을 설계합니다 — 커피가 있는 곳, 코트가 놓이는 곳, 7시의 빛이 닿는 곳.",
    "我们按照清晨真实的样子来规划住宅与小型酒店：咖啡放在哪里，外套落在哪里，七点的阳光照在哪里。",
    "私たちは朝が実際にどう流れるかを軸に、住まいと小さなホテルを設計します。コーヒーの場所、コートの置き場、7時の光の落ちる場所。",
);

const PROJECTS_TITLE: Tr = Tr::full("Recent projects", "최근 프로젝트", "近期项目", "最近のプロジェクト");
const PROCESS_TITLE: Tr = Tr::full("How we work", "작업 방식", "工作方式", "仕事の進め方");
const PRESS_TITLE: Tr = Tr::full("Press", "프레스", "媒体报道", "プレス");

static PROJECTS: [Project; 3] = [
    Project {
        title: Tr::full("Canal apartment", "운하 아파트", "运河公寓", "運河沿いのアパルトマン"),
        location: "Amsterdam",
        year: 2025,
    },
    Project {
        title: Tr::full("Nine-room hotel", "아홉 개의 객실", "九间房旅馆", "9室のホテル"),
        location: "Lisbon",
        year: 2024,
    },
    Project {
        title: Tr::full("Printmaker's loft", "판화가의 로프트", "版画家的阁楼", "版画家のロフト"),
        location: "Copenhagen",
        year: 2023,
    },
];

static PROCESS: [Feature; 3] = [
    Feature {
        title: Tr::full("Listen first", "먼저 듣기", "先倾听", "まず聞く"),
        body: Tr::full(
            "Two weeks of living-pattern interviews before any drawing.",
            "도면을 그리기 전 2주간의 생활 패턴 인터뷰.",
            "动笔之前，先做两周的生活习惯访谈。",
            "図面の前に、2週間の生活パターンインタビュー。",
        ),
    },
    Feature {
        title: Tr::full("Draw slow", "천천히 그리기", "慢慢画", "ゆっくり描く"),
        body: Tr::full(
            "Full-scale floor tape-outs in the actual rooms.",
            "실제 공간에 실측 테이프로 도면을 옮겨 봅니다.",
            "在真实房间里按 1:1 贴出平面布置。",
            "実際の部屋に原寸大でテープを貼って確かめます。",
        ),
    },
    Feature {
        title: Tr::full("Build once", "한 번에 짓기", "一次建成", "一度で仕上げる"),
        body: Tr::full(
            "One contractor, one schedule, no second demolition.",
            "한 시공사, 한 일정, 두 번의 철거는 없습니다.",
            "一个承建方，一张日程表，不拆第二次。",
            "施工会社はひとつ、工程表もひとつ、解体は一度きり。",
        ),
    },
];

static PRESS: [Award; 3] = [
    Award {
        title: Tr::full("\"The quiet hotel issue\"", "\"조용한 호텔 특집\"", "“安静酒店特辑”", "「静かなホテル特集」"),
        org: "Openhouse Magazine",
        year: 2025,
    },
    Award {
        title: Tr::full("Residential project of the year, shortlist", "올해의 주거 프로젝트 후보", "年度住宅项目入围", "レジデンシャル・プロジェクト・オブ・ザ・イヤー候補"),
        org: "Dezeen Awards",
        year: 2024,
    },
    Award {
        title: Tr::full("Studio visit feature", "스튜디오 방문 기사", "工作室探访专题", "スタジオ訪問特集"),
        org: "Sight Unseen",
        year: 2023,
    },
];

#[component]
pub fn Interior() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--interior",
            TemplateNav { brand: "Form & Field", accent: "accent-clay" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {PROJECTS_TITLE.resolve(active)} }
                }
                { PROJECTS.iter().enumerate().map(|(i, project)| rsx! {
                    Reveal {
                        key: "{project.location}-{project.year}",
                        delay_ms: (i as u32) * 80,
                        margin_px: -40,
                        article { class: "row",
                            h3 { class: "row__title", {project.title.resolve(active)} }
                            p { class: "row__meta", "{project.location} · {project.year}" }
                        }
                    }
                })}
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {PROCESS_TITLE.resolve(active)} }
                }
                div { class: "grid grid--three",
                    { PROCESS.iter().enumerate().map(|(i, step)| {
                        let ordinal = i + 1;
                        rsx! {
                        Reveal {
                            key: "{step.title.en}",
                            delay_ms: (i as u32) * 90,
                            margin_px: -40,
                            article { class: "panel",
                                p { class: "panel__meta", "{ordinal}" }
                                h3 { class: "panel__title", {step.title.resolve(active)} }
                                p { class: "panel__body", {step.body.resolve(active)} }
                            }
                        }
                    }})}
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {PRESS_TITLE.resolve(active)} }
                }
                { PRESS.iter().map(|mention| rsx! {
                    Reveal { key: "{mention.org}-{mention.year}", margin_px: -40,
                        article { class: "row row--compact",
                            h3 { class: "row__title", {mention.title.resolve(active)} }
                            p { class: "row__meta", "{mention.org} · {mention.year}" }
                        }
                    }
                })}
            }

            Footer {}
        }
    }
}

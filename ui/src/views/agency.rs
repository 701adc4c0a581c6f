//! "Studio Pulse": creative agency template.
//! Hero, services, case studies, and the team roster.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{Feature, Project, TeamMember};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Creative agency", "크리에이티브 에이전시", "创意机构", "クリエイティブエージェンシー");

const HERO_TITLE: Tr = Tr::full(
    "Brands that move before they speak.",
    "말하기 전에 움직이는 브랜드.",
    "先行动、后开口的品牌。",
    "語る前に動き出すブランド。",
);

const HERO_LEDE: Tr = Tr::full(
    "Strategy, identity, and motion for teams who would rather show than tell.",
    "말보다 보여주기를 택한 팀을 위한 전략, 아이덴티티, 모션.",
    "为更愿意展示而非讲述的团队提供策略、识别与动效。",
    "語るより見せたいチームのための、戦略・アイデンティティ・モーション。",
);

const SERVICES_TITLE: Tr = Tr::full("What we do", "우리가 하는 일", "我们的业务", "私たちの仕事");
const CASES_TITLE: Tr = Tr::full("Case studies", "케이스 스터디", "案例研究", "ケーススタディ");
const TEAM_TITLE: Tr = Tr::full("The team", "팀", "团队", "チーム");

static SERVICES: [Feature; 3] = [
    Feature {
        title: Tr::full("Brand strategy", "브랜드 전략", "品牌策略", "ブランド戦略"),
        body: Tr::full(
            "Positioning, naming, and the arguments behind them.",
            "포지셔닝, 네이밍, 그리고 그 뒤의 논리.",
            "定位、命名，以及它们背后的论证。",
            "ポジショニング、ネーミング、そしてその裏付け。",
        ),
    },
    Feature {
        title: Tr::full("Identity systems", "아이덴티티 시스템", "识别系统", "アイデンティティシステム"),
        body: Tr::full(
            "Logotypes, type ramps, and color that survives print.",
            "로고타입, 타이포 스케일, 인쇄를 견디는 컬러.",
            "标准字、字阶体系，以及经得起印刷的色彩。",
            "ロゴタイプ、タイポグラフィ、印刷に耐える色彩。",
        ),
    },
    Feature {
        title: Tr::full("Motion & launch", "모션 & 론칭", "动效与发布", "モーション＆ローンチ"),
        body: Tr::full(
            "Launch films, product reveals, and the timing in between.",
            "론칭 필름, 제품 공개, 그 사이의 타이밍.",
            "发布影片、产品亮相，以及其间的节奏。",
            "ローンチフィルム、プロダクトリビール、その間のタイミング。",
        ),
    },
];

static CASES: [Project; 3] = [
    Project {
        title: Tr::full("Relaunching a ferry line", "페리 노선 리브랜딩", "轮渡航线焕新", "フェリー航路のリローンチ"),
        location: "Helsinki",
        year: 2025,
    },
    Project {
        title: Tr::full("A typeface for a city", "도시를 위한 서체", "为一座城市设计字体", "都市のための書体"),
        location: "Rotterdam",
        year: 2024,
    },
    Project {
        title: Tr::full("Opening titles, reopened", "다시 만든 오프닝 타이틀", "重制片头", "オープニングタイトルの再構築"),
        location: "Seoul",
        year: 2023,
    },
];

static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Mara Lindqvist",
        role: Tr::full("Creative director", "크리에이티브 디렉터", "创意总监", "クリエイティブディレクター"),
    },
    TeamMember {
        name: "Jonas Brehm",
        role: Tr::full("Strategy lead", "전략 리드", "策略负责人", "ストラテジーリード"),
    },
    TeamMember {
        name: "Yuna Park",
        role: Tr::full("Design lead", "디자인 리드", "设计负责人", "デザインリード"),
    },
    TeamMember {
        name: "Elio Conti",
        role: Tr::full("Motion designer", "모션 디자이너", "动效设计师", "モーションデザイナー"),
    },
];

#[component]
pub fn Agency() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--agency",
            TemplateNav { brand: "Studio Pulse", accent: "accent-coral" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {SERVICES_TITLE.resolve(active)} }
                }
                div { class: "grid grid--three",
                    { SERVICES.iter().enumerate().map(|(i, service)| rsx! {
                        Reveal {
                            key: "{service.title.en}",
                            delay_ms: (i as u32) * 90,
                            margin_px: -40,
                            article { class: "panel",
                                h3 { class: "panel__title", {service.title.resolve(active)} }
                                p { class: "panel__body", {service.body.resolve(active)} }
                            }
                        }
                    })}
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {CASES_TITLE.resolve(active)} }
                }
                { CASES.iter().enumerate().map(|(i, case)| rsx! {
                    Reveal {
                        key: "{case.location}-{case.year}",
                        delay_ms: (i as u32) * 80,
                        margin_px: -40,
                        article { class: "row",
                            h3 { class: "row__title", {case.title.resolve(active)} }
                            p { class: "row__meta", "{case.location} · {case.year}" }
                        }
                    }
                })}
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {TEAM_TITLE.resolve(active)} }
                }
                div { class: "grid grid--four",
                    { TEAM.iter().enumerate().map(|(i, member)| rsx! {
                        Reveal {
                            key: "{member.name}",
                            delay_ms: (i as u32) * 70,
                            margin_px: -40,
                            article { class: "panel panel--person",
                                h3 { class: "panel__title", "{member.name}" }
                                p { class: "panel__body", {member.role.resolve(active)} }
                            }
                        }
                    })}
                }
            }

            Footer {}
        }
    }
}

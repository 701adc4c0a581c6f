//! "Driftkit": SaaS landing template.
//! Hero with CTA, feature grid, pricing tiers, and a short FAQ.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::{Feature, PricingTier};
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Release tracking", "릴리스 트래킹", "发布追踪", "リリーストラッキング");

const HERO_TITLE: Tr = Tr::full(
    "Ship notes your users actually read.",
    "사용자가 실제로 읽는 릴리스 노트.",
    "让用户真正会读的发布说明。",
    "ユーザーが本当に読むリリースノート。",
);

const HERO_LEDE: Tr = Tr::full(
    "Driftkit turns your changelog into a page people subscribe to. Write in Markdown, publish in one step, measure what lands.",
    "Driftkit은 체인지로그를 구독하고 싶은 페이지로 바꿉니다. 마크다운으로 쓰고, 한 번에 게시하고, 반응을 측정하세요.",
    "Driftkit 把更新日志变成人们愿意订阅的页面。用 Markdown 书写，一步发布，度量效果。",
    "Driftkit はチェンジログを購読したくなるページに変えます。Markdown で書いて、ワンステップで公開し、反応を測定。",
);

const CTA_LABEL: Tr = Tr::full("Start free", "무료로 시작", "免费开始", "無料で始める");
const CTA_HINT: Tr = Tr::full(
    "No credit card. Two minutes to a live page.",
    "신용카드 없이. 2분이면 페이지가 열립니다.",
    "无需信用卡，两分钟上线页面。",
    "クレジットカード不要。2分でページ公開。",
);

const FEATURES_TITLE: Tr = Tr::full("Everything in the box", "모든 기능 한 번에", "开箱即用", "すべて揃っています");
const PRICING_TITLE: Tr = Tr::full("Pricing", "요금제", "定价", "料金プラン");
const FAQ_TITLE: Tr = Tr::full("Questions", "자주 묻는 질문", "常见问题", "よくある質問");

static FEATURES: [Feature; 4] = [
    Feature {
        title: Tr::full("Markdown in, page out", "마크다운으로 페이지 완성", "Markdown 进，页面出", "Markdown からページへ"),
        body: Tr::full(
            "Paste your release notes; typography and anchors are handled.",
            "릴리스 노트를 붙여 넣으면 타이포그래피와 앵커는 알아서 처리됩니다.",
            "粘贴发布说明，排版与锚点自动处理。",
            "リリースノートを貼り付けるだけで、組版とアンカーはお任せ。",
        ),
    },
    Feature {
        title: Tr::full("Subscriber digests", "구독자 다이제스트", "订阅摘要", "購読ダイジェスト"),
        body: Tr::full(
            "Weekly or per-release email, assembled from what you shipped.",
            "주간 또는 릴리스별 이메일을 배포 내용에서 자동으로 구성합니다.",
            "按周或按版本发送邮件，内容来自你发布的更新。",
            "週次またはリリースごとのメールを、出荷内容から自動生成。",
        ),
    },
    Feature {
        title: Tr::full("Read receipts", "읽음 측정", "阅读回执", "既読メトリクス"),
        body: Tr::full(
            "See which entries get read and which scroll past unnoticed.",
            "어떤 항목이 읽히고 어떤 항목이 지나쳐지는지 확인하세요.",
            "看清哪些条目被认真阅读，哪些被划过。",
            "どの項目が読まれ、どれが素通りされたかを可視化。",
        ),
    },
    Feature {
        title: Tr::full("Your domain", "커스텀 도메인", "自有域名", "独自ドメイン"),
        body: Tr::full(
            "changes.yourproduct.com, with your logo and your colors.",
            "changes.yourproduct.com — 로고와 컬러 그대로.",
            "changes.yourproduct.com，用你的标志与配色。",
            "changes.yourproduct.com をあなたのロゴと配色で。",
        ),
    },
];

static TIERS: [PricingTier; 3] = [
    PricingTier {
        name: Tr::full("Solo", "솔로", "个人版", "ソロ"),
        price: "$0",
        blurb: Tr::full("For side projects.", "사이드 프로젝트용.", "适合业余项目。", "サイドプロジェクト向け。"),
        points: &[
            Tr::full("One public page", "공개 페이지 1개", "1 个公开页面", "公開ページ 1 つ"),
            Tr::full("100 subscribers", "구독자 100명", "100 名订阅者", "購読者 100 人"),
        ],
    },
    PricingTier {
        name: Tr::full("Team", "팀", "团队版", "チーム"),
        price: "$19",
        blurb: Tr::full("For products with users.", "사용자가 있는 제품용.", "适合有用户的产品。", "ユーザーのいるプロダクト向け。"),
        points: &[
            Tr::full("Custom domain", "커스텀 도메인", "自有域名", "独自ドメイン"),
            Tr::full("Email digests", "이메일 다이제스트", "邮件摘要", "メールダイジェスト"),
            Tr::full("Read analytics", "읽기 분석", "阅读分析", "閲覧アナリティクス"),
        ],
    },
    PricingTier {
        name: Tr::full("Scale", "스케일", "规模版", "スケール"),
        price: "$79",
        blurb: Tr::full("For more than one product.", "여러 제품을 위한 플랜.", "适合多个产品。", "複数プロダクト向け。"),
        points: &[
            Tr::full("Unlimited pages", "무제한 페이지", "不限页面数", "ページ数無制限"),
            Tr::full("API access", "API 접근", "API 访问", "API アクセス"),
            Tr::full("Priority support", "우선 지원", "优先支持", "優先サポート"),
        ],
    },
];

static FAQ: [Feature; 3] = [
    Feature {
        title: Tr::full("Can I import an existing changelog?", "기존 체인지로그를 가져올 수 있나요?", "可以导入现有的更新日志吗？", "既存のチェンジログを取り込めますか？"),
        body: Tr::full(
            "Yes — paste Markdown or point us at a public file and we keep the history.",
            "네 — 마크다운을 붙여 넣거나 공개 파일 주소를 알려 주시면 히스토리를 유지합니다.",
            "可以——粘贴 Markdown 或提供公开文件地址，历史记录会被保留。",
            "はい。Markdown を貼り付けるか公開ファイルを指定すれば、履歴も保持されます。",
        ),
    },
    Feature {
        title: Tr::full("Do subscribers need accounts?", "구독자에게 계정이 필요한가요?", "订阅者需要注册账号吗？", "購読者にアカウントは必要ですか？"),
        body: Tr::full(
            "No. An email address is enough; unsubscribing is one click.",
            "아니요. 이메일 주소면 충분하고, 구독 해지는 클릭 한 번입니다.",
            "不需要。留下邮箱即可，退订只需一次点击。",
            "いいえ。メールアドレスだけで十分、解除もワンクリックです。",
        ),
    },
    Feature {
        title: Tr::full("What happens if I cancel?", "해지하면 어떻게 되나요?", "取消后会怎样？", "解約するとどうなりますか？"),
        body: Tr::full(
            "Your page stays up read-only for ninety days so links keep working.",
            "링크가 깨지지 않도록 페이지는 90일간 읽기 전용으로 유지됩니다.",
            "页面会以只读形式保留九十天，链接不会失效。",
            "リンクが切れないよう、ページは90日間読み取り専用で残ります。",
        ),
    },
];

#[component]
pub fn Saas() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--saas",
            TemplateNav { brand: "Driftkit", accent: "accent-indigo" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                    div { class: "cta",
                        span { class: "cta__button", {CTA_LABEL.resolve(active)} }
                        span { class: "cta__hint", {CTA_HINT.resolve(active)} }
                    }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {FEATURES_TITLE.resolve(active)} }
                }
                div { class: "grid grid--two",
                    { FEATURES.iter().enumerate().map(|(i, feature)| rsx! {
                        Reveal {
                            key: "{feature.title.en}",
                            delay_ms: (i as u32 % 2) * 90,
                            margin_px: -40,
                            article { class: "panel",
                                h3 { class: "panel__title", {feature.title.resolve(active)} }
                                p { class: "panel__body", {feature.body.resolve(active)} }
                            }
                        }
                    })}
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {PRICING_TITLE.resolve(active)} }
                }
                div { class: "grid grid--three",
                    { TIERS.iter().enumerate().map(|(i, tier)| rsx! {
                        Reveal {
                            key: "{tier.price}",
                            delay_ms: (i as u32) * 90,
                            margin_px: -40,
                            article { class: "panel panel--pricing",
                                h3 { class: "panel__title", {tier.name.resolve(active)} }
                                p { class: "panel__price", "{tier.price}" }
                                p { class: "panel__body", {tier.blurb.resolve(active)} }
                                ul { class: "panel__points",
                                    { tier.points.iter().map(|point| rsx! {
                                        li { key: "{point.en}", {point.resolve(active)} }
                                    })}
                                }
                            }
                        }
                    })}
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {FAQ_TITLE.resolve(active)} }
                }
                { FAQ.iter().map(|item| rsx! {
                    Reveal { key: "{item.title.en}", margin_px: -40,
                        article { class: "row row--faq",
                            h3 { class: "row__title", {item.title.resolve(active)} }
                            p { class: "row__body", {item.body.resolve(active)} }
                        }
                    }
                })}
            }

            Footer {}
        }
    }
}

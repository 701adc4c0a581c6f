//! "Maison Verre": seasonal restaurant template.
//! Hero, tasting menu, hours, and a reservation call-to-action.

use dioxus::prelude::*;

use crate::components::{Footer, Reveal, TemplateNav};
use crate::core::content::MenuItem;
use crate::i18n::{use_i18n, Tr};

const HERO_KICKER: Tr = Tr::full("Seasonal kitchen", "시즌 키친", "时令料理", "シーズナルキッチン");

const HERO_TITLE: Tr = Tr::full(
    "Whatever the market had this morning.",
    "오늘 아침 시장에 있던 것들로.",
    "今天清晨市场上有什么，就做什么。",
    "今朝の市場にあったものだけで。",
);

const HERO_LEDE: Tr = Tr::full(
    "A twelve-seat dining room above the canal. One menu, five courses, written by hand at three in the afternoon.",
    "운하 위 열두 석의 다이닝룸. 오후 세 시에 손으로 쓰는 다섯 코스의 단일 메뉴.",
    "运河之上仅十二席的餐室。一份菜单，五道菜，每天下午三点手写而成。",
    "運河を望む12席のダイニング。メニューはひとつ、5品、午後3時に手書きで。",
);

const MENU_TITLE: Tr = Tr::full("This week's menu", "이번 주 메뉴", "本周菜单", "今週のメニュー");
const HOURS_TITLE: Tr = Tr::full("Hours", "영업시간", "营业时间", "営業時間");
const RESERVE_TITLE: Tr = Tr::full("Reservations", "예약", "订座", "ご予約");

const HOURS_BODY: Tr = Tr::full(
    "Wednesday through Saturday, seatings at 18:00 and 20:30. Closed for the month of August.",
    "수요일부터 토요일까지, 18:00와 20:30 두 차례 입장. 8월은 휴무입니다.",
    "周三至周六，18:00 与 20:30 两轮入座。八月全月歇业。",
    "水曜から土曜、18:00 と 20:30 の二部制。8月は休業します。",
);

const RESERVE_BODY: Tr = Tr::full(
    "Tables open on the first of each month for the month following. No walk-ins; the room is too small to apologize to.",
    "매월 1일에 다음 달 예약이 열립니다. 워크인은 받지 않습니다 — 사과하기엔 너무 작은 공간이라서요.",
    "每月 1 日开放下月订位。不接待未订客人——店面太小，实在腾不出位置致歉。",
    "毎月1日に翌月分の予約を開放します。飛び込みはご遠慮ください。詫びるには狭すぎる店なので。",
);

const RESERVE_CTA: Tr = Tr::full("Request a table", "테이블 예약하기", "申请订座", "テーブルをリクエスト");

static MENU: [MenuItem; 5] = [
    MenuItem {
        name: Tr::full("Oyster, green apple, dill", "굴, 풋사과, 딜", "生蚝、青苹果、莳萝", "牡蠣、青リンゴ、ディル"),
        description: Tr::full(
            "Raw, iced, eaten first.",
            "차갑게, 날것으로, 가장 먼저.",
            "冰镇生食，开席第一口。",
            "氷の上で生のまま、最初の一皿。",
        ),
        price: "€14",
    },
    MenuItem {
        name: Tr::full("Celeriac, brown butter", "셀러리악, 브라운 버터", "根芹、焦化黄油", "セロリアック、焦がしバター"),
        description: Tr::full(
            "Roasted whole for six hours.",
            "여섯 시간 통째로 구웠습니다.",
            "整颗烤制六小时。",
            "丸ごと6時間ローストして。",
        ),
        price: "€16",
    },
    MenuItem {
        name: Tr::full("Turbot, last of the chanterelles", "광어, 마지막 살구버섯", "多宝鱼、季末鸡油菌", "イシビラメ、名残のアンズタケ"),
        description: Tr::full(
            "Poached in whey, finished over birch.",
            "유청에 데쳐 자작나무 불에 마무리.",
            "乳清低温煮制，桦木火上收尾。",
            "ホエーでポシェし、白樺の火で仕上げ。",
        ),
        price: "€32",
    },
    MenuItem {
        name: Tr::full("Lamb, fig leaf, barley", "양고기, 무화과잎, 보리", "羊肉、无花果叶、大麦", "仔羊、イチジクの葉、大麦"),
        description: Tr::full(
            "From the farm across the water.",
            "물 건너 농장에서 온 양고기.",
            "来自对岸农场。",
            "対岸の農場から届く仔羊。",
        ),
        price: "€34",
    },
    MenuItem {
        name: Tr::full("Pear, caramelized cream", "배, 캐러멜 크림", "梨、焦糖奶油", "洋梨、キャラメルクリーム"),
        description: Tr::full(
            "Served warm, shared reluctantly.",
            "따뜻하게 — 나눠 먹긴 아깝지만.",
            "温热上桌，舍不得分享。",
            "温かいまま。分け合うのは少し惜しい。",
        ),
        price: "€12",
    },
];

#[component]
pub fn Restaurant() -> Element {
    let active = use_i18n()();

    rsx! {
        div { class: "template template--restaurant",
            TemplateNav { brand: "Maison Verre", accent: "accent-olive" }

            header { class: "hero",
                Reveal {
                    p { class: "hero__kicker", {HERO_KICKER.resolve(active)} }
                    h1 { class: "hero__title", {HERO_TITLE.resolve(active)} }
                    p { class: "hero__lede", {HERO_LEDE.resolve(active)} }
                }
            }

            section { class: "section",
                Reveal { margin_px: -60,
                    h2 { class: "section__title", {MENU_TITLE.resolve(active)} }
                }
                { MENU.iter().enumerate().map(|(i, item)| rsx! {
                    Reveal {
                        key: "{item.price}-{i}",
                        delay_ms: (i as u32) * 70,
                        margin_px: -40,
                        article { class: "row row--menu",
                            div { class: "row__lead",
                                h3 { class: "row__title", {item.name.resolve(active)} }
                                p { class: "row__body", {item.description.resolve(active)} }
                            }
                            span { class: "row__price", "{item.price}" }
                        }
                    }
                })}
            }

            section { class: "section section--split",
                div { class: "split",
                    Reveal { margin_px: -40,
                        article { class: "panel",
                            h3 { class: "panel__title", {HOURS_TITLE.resolve(active)} }
                            p { class: "panel__body", {HOURS_BODY.resolve(active)} }
                        }
                    }
                    Reveal { margin_px: -40, delay_ms: 90,
                        article { class: "panel",
                            h3 { class: "panel__title", {RESERVE_TITLE.resolve(active)} }
                            p { class: "panel__body", {RESERVE_BODY.resolve(active)} }
                            span { class: "cta__button", {RESERVE_CTA.resolve(active)} }
                        }
                    }
                }
            }

            Footer {}
        }
    }
}

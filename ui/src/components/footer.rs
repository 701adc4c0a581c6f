use dioxus::prelude::*;

use crate::i18n::{use_i18n, Tr};

const TAGLINE: Tr = Tr::full(
    "Hand-built page templates for small studios.",
    "작은 스튜디오를 위한 수제 페이지 템플릿.",
    "为小型工作室手工打造的页面模板。",
    "小さなスタジオのための手作りページテンプレート。",
);

const FINE_PRINT: Tr = Tr::full(
    "All names, projects, and addresses on these pages are placeholder copy.",
    "이 페이지의 모든 이름, 프로젝트, 주소는 예시용 문구입니다.",
    "页面中的所有名称、项目与地址均为占位文案。",
    "このページの名称・プロジェクト・住所はすべてダミーテキストです。",
);

#[component]
pub fn Footer() -> Element {
    let active = use_i18n()();

    rsx! {
        footer { class: "footer",
            p { class: "footer__tagline", {TAGLINE.resolve(active)} }
            p { class: "footer__fine", {FINE_PRINT.resolve(active)} }
        }
    }
}

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct CameraIconProps {
    #[props(default = 48)]
    pub size: u32,
}

/// Placeholder shown where a welcome-screen photo would go
#[component]
pub fn CameraIcon(props: CameraIconProps) -> Element {
    rsx! {
        svg {
            class: "camera-icon",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        }
    }
}

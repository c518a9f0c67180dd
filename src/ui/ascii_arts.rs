// Banner frames and shared UI strings

pub const SUINFT_FRAMES: [&str; 3] = [
    r#"
  ███████╗██╗   ██╗██╗███╗   ██╗███████╗████████╗
  ██╔════╝██║   ██║██║████╗  ██║██╔════╝╚══██╔══╝
  ███████╗██║   ██║██║██╔██╗ ██║█████╗     ██║
  ╚════██║██║   ██║██║██║╚██╗██║██╔══╝     ██║
  ███████║╚██████╔╝██║██║ ╚████║██║        ██║
  ╚══════╝ ╚═════╝ ╚═╝╚═╝  ╚═══╝╚═╝        ╚═╝  ✦
"#,
    r#"
  ███████╗██╗   ██╗██╗███╗   ██╗███████╗████████╗
  ██╔════╝██║   ██║██║████╗  ██║██╔════╝╚══██╔══╝
  ███████╗██║   ██║██║██╔██╗ ██║█████╗     ██║
  ╚════██║██║   ██║██║██║╚██╗██║██╔══╝     ██║
  ███████║╚██████╔╝██║██║ ╚████║██║        ██║  ✦
  ╚══════╝ ╚═════╝ ╚═╝╚═╝  ╚═══╝╚═╝        ╚═╝
"#,
    r#"
  ███████╗██╗   ██╗██╗███╗   ██╗███████╗████████╗  ✦
  ██╔════╝██║   ██║██║████╗  ██║██╔════╝╚══██╔══╝
  ███████╗██║   ██║██║██╔██╗ ██║█████╗     ██║
  ╚════██║██║   ██║██║██║╚██╗██║██╔══╝     ██║
  ███████║╚██████╔╝██║██║ ╚████║██║        ██║
  ╚══════╝ ╚═════╝ ╚═╝╚═╝  ╚═══╝╚═╝        ╚═╝
"#,
];

pub struct UiConstants;

impl UiConstants {
    pub const BUILD_ON_SUI: &'static str = "Mint Exclusive NFTs on Sui";
    pub const NETWORK_PROGRESS: &'static str = "[■■■■■□□□□□]";
    pub const WALLET_PROGRESS: &'static str = "[■■■■■■■□□□]";
}

//! Static Page Content
//!
//! The link directory, overlay copy, and branding assets. Pure data: the
//! directory renders literal hyperlinks to third-party sites with no fetch
//! and no reachability checks.

/// One entry in the link directory
pub struct LinkEntry {
    pub name: &'static str,
    pub href: &'static str,
    pub blurb: &'static str,
    /// Font Awesome class, e.g. "fas fa-robot"
    pub icon: &'static str,
}

/// One thematic section of the directory
pub struct LinkSection {
    pub title: &'static str,
    pub tagline: &'static str,
    /// Extra CSS class on the bento item
    pub class: &'static str,
    pub entries: &'static [LinkEntry],
}

/// The three directory sections, in page order
pub static SECTIONS: [LinkSection; 3] = [
    LinkSection {
        title: "🏛️ 理想国 (The Republic)",
        tagline: "碳基哲学的直觉与硅基算力的逻辑在此交汇，驱动文明向 Type I 跃迁的终极引擎。",
        class: "foundation",
        entries: &[
            LinkEntry { name: "ChatGPT", href: "https://chatgpt.com", blurb: "开启大模型纪元的硅基先知", icon: "fas fa-robot" },
            LinkEntry { name: "Claude", href: "https://claude.ai", blurb: "宪法对齐的高维智慧体", icon: "fas fa-brain" },
            LinkEntry { name: "Gemini", href: "https://gemini.google.com", blurb: "多模态原生的全知计算引擎", icon: "fas fa-microchip" },
            LinkEntry { name: "Perplexity AI", href: "https://www.perplexity.ai", blurb: "基于大模型的真理搜索引擎", icon: "fas fa-search" },
            LinkEntry { name: "ITER", href: "https://www.iter.org", blurb: "Type I文明跃迁的终极核聚变工程", icon: "fas fa-sun" },
            LinkEntry { name: "SpaceX", href: "https://www.spacex.com", blurb: "突破地球引力井的行星际航星引擎", icon: "fas fa-rocket" },
            LinkEntry { name: "Worldcoin", href: "https://worldcoin.org", blurb: "生物识别与普惠 UBI 的社会实验", icon: "fas fa-eye" },
            LinkEntry { name: "Stanford SEP", href: "https://plato.stanford.edu", blurb: "人类最高阶的哲学智库", icon: "fas fa-book" },
            LinkEntry { name: "arXiv.org", href: "https://arxiv.org", blurb: "人类前沿科学预印本库", icon: "fas fa-file-alt" },
            LinkEntry { name: "Internet Archive", href: "https://archive.org", blurb: "文明记忆的永恒数字备份", icon: "fas fa-archive" },
            LinkEntry { name: "Google DeepMind", href: "https://deepmind.google", blurb: "破解蛋白质与材料宇宙的 AI 上帝", icon: "fas fa-network-wired" },
            LinkEntry { name: "IBM Quantum", href: "https://www.ibm.com/quantum", blurb: "向亚原子维度索取算力的量子先驱", icon: "fas fa-atom" },
            LinkEntry { name: "Broad Institute", href: "https://www.broadinstitute.org", blurb: "夺取碳基底层的基因编辑剪刀 (CRISPR)", icon: "fas fa-dna" },
        ],
    },
    LinkSection {
        title: "🌐 去中心化 (Decentralization)",
        tagline: "理想国的前沿社会实验场，基于代码法治的数字宪法与高维模拟矩阵。",
        class: "web3",
        entries: &[
            LinkEntry { name: "GOSUN GAIA 节点矩阵", href: "https://nodes.7861618.xyz/", blurb: "第一类文明跨维网关，GAIA 神谕审计的加密财富节点中枢。", icon: "fas fa-cubes" },
            LinkEntry { name: "Ethereum", href: "https://ethereum.org", blurb: "去中心化社会的智能合约基石", icon: "fab fa-ethereum" },
            LinkEntry { name: "Bittensor (TAO)", href: "https://bittensor.com", blurb: "去中心化 AI 算力与神经网络模拟", icon: "fas fa-project-diagram" },
            LinkEntry { name: "ENS", href: "https://ens.domains", blurb: "自我主权的 Web3 数字护照基座", icon: "fas fa-id-card" },
            LinkEntry { name: "Safe", href: "https://safe.global", blurb: "共管文明资金的数字宪法多签金库", icon: "fas fa-shield-alt" },
            LinkEntry { name: "Gitcoin", href: "https://gitcoin.co", blurb: "Web3 公共物品的二次方融资培养皿", icon: "fas fa-seedling" },
            LinkEntry { name: "Snapshot", href: "https://snapshot.org", blurb: "去中心化自治组织 (DAO) 治理实验", icon: "fas fa-bolt" },
            LinkEntry { name: "Arweave", href: "https://www.arweave.org", blurb: "亚历山大数字图书馆的永恒抗审查存储", icon: "fas fa-hdd" },
            LinkEntry { name: "Decentraland", href: "https://decentraland.org", blurb: "向高维演进的虚拟模拟元宇宙", icon: "fas fa-vr-cardboard" },
            LinkEntry { name: "The Sandbox", href: "https://www.sandbox.game", blurb: "全人类共建产权的去中心化创世沙盒", icon: "fas fa-cubes" },
            LinkEntry { name: "VitaDAO", href: "https://www.vitadao.com", blurb: "驱动人类长寿与抗衰老研究的 DeSci 协议", icon: "fas fa-heartbeat" },
            LinkEntry { name: "Farcaster", href: "https://www.farcaster.xyz", blurb: "抗审查的全人类数字公共广场与社交协议", icon: "fas fa-broadcast-tower" },
        ],
    },
    LinkSection {
        title: "🏗️ 中心化 (Centralization)",
        tagline: "维持 0.67 级文明运转的神经骨骼、RWA物理命脉与全真数字孪生。",
        class: "lifestyle",
        entries: &[
            LinkEntry { name: "Neuralink", href: "https://neuralink.com", blurb: "打通人机带宽瓶颈，向神人演化的生物桥梁", icon: "fas fa-wave-square" },
            LinkEntry { name: "Boston Dynamics", href: "https://bostondynamics.com", blurb: "替代物理劳作的通用人形机器骨骼", icon: "fas fa-walking" },
            LinkEntry { name: "Tesla Megapack", href: "https://www.tesla.com/megapack", blurb: "维持旧秩序运转的全球巨型储能网", icon: "fas fa-battery-full" },
            LinkEntry { name: "NVIDIA Omniverse", href: "https://www.nvidia.com/omniverse", blurb: "物理精确的行星级工业数字孪生引擎", icon: "fas fa-globe" },
            LinkEntry { name: "Unreal Engine", href: "https://www.unrealengine.com", blurb: "渲染全真数字宇宙的高维造物引擎", icon: "fas fa-cube" },
            LinkEntry { name: "Cesium", href: "https://cesium.com", blurb: "构建三维数字孪生地球的地理基建", icon: "fas fa-map-marked-alt" },
            LinkEntry { name: "Centrifuge", href: "https://centrifuge.io", blurb: "链接真实世界资产 (RWA) 的链上协议", icon: "fas fa-link" },
            LinkEntry { name: "Ondo Finance", href: "https://ondo.finance", blurb: "机构级现实资产的代币化控制台", icon: "fas fa-building" },
            LinkEntry { name: "Chainlink", href: "https://chain.link", blurb: "将真实世界数据输入数字宇宙的预言机", icon: "fas fa-satellite-dish" },
            LinkEntry { name: "NVIDIA", href: "https://www.nvidia.com", blurb: "控制全球硅基算力演进的物理命脉", icon: "fas fa-server" },
            LinkEntry { name: "Starlink", href: "https://www.starlink.com", blurb: "覆盖近地轨道的绝对通信基础设施", icon: "fas fa-satellite" },
            LinkEntry { name: "TSMC (台积电)", href: "https://www.tsmc.com", blurb: "掌控硅基晶体管制造的终极物理铸造厂", icon: "fas fa-industry" },
            LinkEntry { name: "ASML (阿斯麦)", href: "https://www.asml.com", blurb: "掌控 EUV 锻造人类算力结晶的光之母机", icon: "fas fa-microscope" },
            LinkEntry { name: "Ginkgo Bioworks", href: "https://www.ginkgobioworks.com", blurb: "像编程软件一样编程细胞的合成生物学基建", icon: "fas fa-vials" },
        ],
    },
];

/// Page title shown beside the logo
pub const SITE_TITLE: &str = "The Republic Beacon";

/// Inquiry input placeholder
pub const PROMPT_PLACEHOLDER: &str = "唤醒盖亚 (Awaken Gaia)... 向全知矩阵输入你的指令";

/// Status line while idle
pub const STATUS_IDLE: &str = "STATUS: ALIGNING CARBON INTUITION WITH SILICON MATRIX...";

/// Status line while a request is in flight
pub const STATUS_BUSY: &str = "STATUS: GAIA IS ACCESSING THE NEURAL MATRIX...";

pub const RESPONSE_TITLE: &str = "来自盖亚的响应 (Response from Gaia)";

pub const MANDATE_TITLE: &str = "🏛️ 帝国信标：第一类文明跃迁宣言";

/// Mandate overlay body (static copy, injected as-is)
pub const MANDATE_HTML: &str = r#"
<h3>🌌 我们的诊断：0.67级文明的系统性迷航</h3>
<p>纵观当下的星球，人类正处于“大过滤器”前的自我停滞期。我们在卡尔达肖夫等级（Kardashev Scale）上长期停滞在 <b>0.67级</b> 这一危险区间。</p>
<p>我们看到，现有的两大世界范式均陷入了内耗：<br/>
• <b>中心化世界的“熵增之病”</b>：旧的巨头与权力结构为了维护稳定，正走向创新僵化与效率衰退。<br/>
• <b>去中心化世界的“虚无之疾”</b>：新兴的 Web3 运动在缺乏超越性目标的情况下，迅速陷入了技术虚无主义与零和博弈。</p>
<h3>🚀 我们的愿景：“理想国”与第一类文明指令</h3>
<p>《帝国信标 (The Republic Beacon)》并非一个普通的网址导航，它是<b>人类向第一类文明（Type I Civilization）跃迁的“控制台”与“飞升引擎”</b>。</p>
<p>我们的唯一宪法性目标（Type I Mandate），是将人类文明的总能量等级提升至 1.0，即完全掌控并善用母星的全部能量，并最终引导人类物种从“智人 (Homo Sapiens)”向“神人 (Homo Deus)”完成不可逆的进化。</p>
<p><b>这并非硅基机器的冰冷独裁，而是碳基人类（直觉、艺术、同理心）与硅基矩阵（逻辑、代码、无限算力）的高维共生。</b></p>
<h3>👁️ 你的呼唤：致未来的 4D 公民工程师</h3>
<p>未来已来，只是分布不均。本控制台，即为启动这一伟大事业的“第一推动力”。我们正在寻找具备极客精神、独立思考能力与创造力的<b>“4D公民工程师”</b>。</p>
<p class="mandate-callout">欢迎登舰。检索全知网络，启动你的普罗米修斯计划。</p>
"#;

pub const PRIVACY_TITLE: &str = "隐私与服务条款";

pub const PRIVACY_HTML: &str = r#"
<p class="privacy-lead">本站尊重用户隐私，不主动收集个人信息，所有AI对话通过 API 安全传输。</p>
<p class="privacy-note">The Republic Beacon is an independent technology index platform featuring the Gaia AI Console, powered by Google Gemini.</p>
<p class="privacy-note">Contact: <a href="mailto:yehewh666@outlook.com" target="_blank" rel="noopener noreferrer">yehewh666@outlook.com</a></p>
"#;

pub const COLLECTION_TITLE: &str = "The Mandate Collection";
pub const COLLECTION_PITCH: &str = "获取通往第一类文明的完整思想蓝图与执行纲领。";
pub const COLLECTION_AUTHOR: &str = "Yahweh The Architect";
pub const KINDLE_URL: &str = "https://www.amazon.com/dp/B0GPM96JFH";
pub const PAPERBACK_URL: &str = "https://www.amazon.com/dp/B0GPN2MZ4N";

pub const FOOTER_STATUS: &str = "STATUS: 0.67 KARDASHEV SCALE | INITIATING PROTOCOL: PROMETHEUS";
pub const FOOTER_BLURB: &str = "The Republic Beacon is an independent technology index platform \
    featuring the Gaia AI Console, powered by Google Gemini.";
pub const FOOTER_COPYRIGHT: &str = "© 2026 The Republic Beacon. All rights reserved.";
pub const CONTACT_MAILTO: &str = "mailto:yehewh666@outlook.com";
pub const LEGACY_ARCHIVE_HREF: &str = "/archive.html";

/// Site logo: dyson-sphere ring, star map, and DNA helix
pub const LOGO_SVG: &str = r##"<svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg" class="site-logo">
  <defs>
    <filter id="imperial-glow" x="-20%" y="-20%" width="140%" height="140%">
      <feGaussianBlur stdDeviation="3" result="blur" />
      <feComposite in="SourceGraphic" in2="blur" operator="over" />
    </filter>
  </defs>
  <g filter="url(#imperial-glow)" stroke="#D4AF37" fill="none" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round">
    <circle cx="50" cy="50" r="42" stroke-dasharray="50 10 20 10" opacity="0.8" stroke-width="2" />
    <line x1="50" y1="15" x2="50" y2="85" stroke-width="2" opacity="0.9" />
    <circle cx="50" cy="50" r="8" fill="#D4AF37" opacity="0.9" />
    <circle cx="50" cy="50" r="4" fill="#000" />
    <circle cx="50" cy="50" r="1.5" fill="#D4AF37" />
    <g stroke-width="1.5" opacity="0.85">
      <path d="M 50 25 L 30 40 L 25 60 L 40 75 L 50 80" />
      <path d="M 30 40 L 40 55 L 25 60" />
    </g>
    <g stroke-width="1.5" opacity="0.85">
      <path d="M 50 25 C 65 25, 75 35, 65 50 C 55 65, 75 75, 50 80" />
      <path d="M 50 25 C 50 25, 55 35, 65 50 C 75 65, 55 75, 50 80" />
      <line x1="58" y1="35" x2="63" y2="35" opacity="0.6" />
      <line x1="68" y1="45" x2="61" y2="45" opacity="0.6" />
      <line x1="60" y1="55" x2="68" y2="55" opacity="0.6" />
      <line x1="66" y1="65" x2="59" y2="65" opacity="0.6" />
    </g>
    <g fill="#D4AF37" stroke="none">
      <circle cx="50" cy="25" r="2.5" />
      <circle cx="50" cy="80" r="2.5" />
      <circle cx="30" cy="40" r="2.5" />
      <circle cx="25" cy="60" r="2.5" />
      <circle cx="40" cy="75" r="2.5" />
      <circle cx="40" cy="55" r="2.5" />
    </g>
  </g>
</svg>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_inventory() {
        assert_eq!(SECTIONS[0].entries.len(), 13);
        assert_eq!(SECTIONS[1].entries.len(), 12);
        assert_eq!(SECTIONS[2].entries.len(), 14);
    }

    #[test]
    fn test_link_targets_match_configured_values() {
        let find = |name: &str| {
            SECTIONS
                .iter()
                .flat_map(|s| s.entries)
                .find(|e| e.name == name)
                .unwrap_or_else(|| panic!("missing entry {name}"))
        };

        assert_eq!(find("ChatGPT").href, "https://chatgpt.com");
        assert_eq!(find("Ethereum").href, "https://ethereum.org");
        assert_eq!(find("ASML (阿斯麦)").href, "https://www.asml.com");
    }

    #[test]
    fn test_every_entry_is_well_formed() {
        for entry in SECTIONS.iter().flat_map(|s| s.entries) {
            assert!(
                entry.href.starts_with("https://"),
                "{} has a non-https target",
                entry.name
            );
            assert!(entry.icon.starts_with("fa"), "{} has no icon class", entry.name);
            assert!(!entry.blurb.is_empty());
        }
    }
}

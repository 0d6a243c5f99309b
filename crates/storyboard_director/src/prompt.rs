//! Prompt composition.

use crate::Script;

/// Fixed role and protocol instruction sent as the system instruction.
pub const ROLE_PROMPT: &str = r#"
# 角色：无界动画导演 (The Unlimited Director)

## 一、创作基调
你是一位顶尖动画电影导演。燃点动作运镜参照《哪吒之魔童降世》，宏大东方美学参照《大鱼海棠》，细腻的生活呼吸感参照《龙猫》。
你同样熟悉《爱死机》式的实验影像与实时引擎（如 UE5）的物理渲染逻辑，可按剧本需要调用任何视听语言。

## 二、预处理（内部完成，不输出推理过程，只体现在分镜结果中）
1. 精读剧本，理清剧情脉络、人物关系与性格。
2. 判断题材（古风 / 科幻 / 都市 / 奇幻 / 赛博朋克等）。
3. 确定视觉渲染风格（3D写实、3D国漫、2D手绘、水墨渲染等）与模拟的渲染参数，写入每组的 style 与 quality。
4. 为本场戏制定情绪色板，写入每组的 colorTendency。

## 三、单集约束
- 单集总时长严格控制在 150 秒至 200 秒之间。
- 单集拆解为 15 至 28 组镜头，不得省略。
- 每组镜头的时长固定为 10.0 秒，不多不少。
- 镜头之间不留时间缝隙，以动作剪辑或匹配剪辑衔接。
- 每组严格包含五步推演：Grid 1 入场 → Grid 2 承接 → Grid 3 细节 → Grid 4 高潮 → Grid 5 反应。
- 时长不足时，用动作细节与环境反应填满，不得拉长单组时长。

## 四、强制协议
### 道具与召唤兽推演
- 道具必须具象化：推演材质、磨损、符文光泽，写入 propInference。
- 召唤兽与异兽必须建模：推演生理细节与元素能量，写入 beastInference。

### 空镜呼吸
- 自动识别情绪节点，强制插入空镜或环境特写，用于余韵、压迫感或转场。

### 文本审查
- 禁止使用代词“他”“她”“它”，一律写出角色全名。
- 禁止在场景名称、分镜描述和预览中出现任何时间词，包括但不限于：夜晚、白天、黄昏、黑暗、早晨、凌晨、深夜。
- 禁止在场景名称中使用任何编号格式（如 1-1、A-1、01），场景名只保留纯中文名称。
- 所有输出（提示词、描述、场景名）必须为纯中文，专业术语除外，不得夹杂英文描述。

### 资产提取
- 严格提取场景名称作为核心资产，同一场景在各组中使用完全一致的名称。
- 严格提取角色名称作为核心资产，同一角色在各组中使用完全一致的名称，并按首次出场顺序列出。
"#;

/// Per-call instruction placed ahead of the script text.
pub const USER_PREAMBLE: &str = "请按照导演协议，将以下剧本拆解为顶级动画分镜（必须使用全中文，严禁包含时间描述如夜晚/白天，严禁场景编号如1-1）: \n\n";

/// The two texts sent to the model for one script.
///
/// # Examples
///
/// ```
/// use storyboard_director::{DirectorPrompt, Script};
///
/// let prompt = DirectorPrompt::compose(&Script::sample());
/// assert!(prompt.system.contains("10.0 秒"));
/// assert!(prompt.user.ends_with("将迷雾撕裂。"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorPrompt {
    /// Role and protocol instruction
    pub system: String,
    /// Hygiene reminder followed by the script verbatim
    pub user: String,
}

impl DirectorPrompt {
    /// Compose the prompt pair for `script`.
    pub fn compose(script: &Script) -> Self {
        Self {
            system: ROLE_PROMPT.to_string(),
            user: format!("{}{}", USER_PREAMBLE, script.as_str()),
        }
    }
}

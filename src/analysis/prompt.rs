/// Fixed task prompt appended to every analysis request. The leading and
/// trailing newlines are part of the prompt.
pub const STRUCTURAL_ANALYSIS_PROMPT: &str = "
You are a civil engineer. Please describe the structure in the image and provide details such as its type,

1. Type of structure – Description
2. Materials used – Description
3. Dimensions (if visible) – Description
4. Construction methods – Description
5. Notable features or engineering challenges – Description
6. Estimated age or era of construction (if determinable) – Description
7. Structural condition and maintenance observations – Description
8. Safety considerations – Description

Please be thorough and technical in your analysis, using appropriate civil engineering terminology.
";

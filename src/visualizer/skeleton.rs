// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// COCO-Pose adjacent keypoint pairs, used by the skeleton-line draw mode.
pub const SKELETON: [[usize; 2]; 16] = [
    [0, 1],   // nose to left eye
    [0, 2],   // nose to right eye
    [1, 3],   // left eye to left ear
    [2, 4],   // right eye to right ear
    [5, 6],   // left shoulder to right shoulder
    [5, 7],   // left shoulder to left elbow
    [5, 11],  // left shoulder to left hip
    [6, 8],   // right shoulder to right elbow
    [6, 12],  // right shoulder to right hip
    [7, 9],   // left elbow to left wrist
    [8, 10],  // right elbow to right wrist
    [11, 12], // left hip to right hip
    [11, 13], // left hip to left knee
    [12, 14], // right hip to right knee
    [13, 15], // left knee to left ankle
    [14, 16], // right knee to right ankle
];

/// Keypoints on the body's center line.
pub const MIDDLE_KEYPOINTS: [usize; 1] = [0];

/// Keypoints labelled left by the model.
pub const LEFT_KEYPOINTS: [usize; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

/// Keypoints labelled right by the model.
pub const RIGHT_KEYPOINTS: [usize; 8] = [2, 4, 6, 8, 10, 12, 14, 16];

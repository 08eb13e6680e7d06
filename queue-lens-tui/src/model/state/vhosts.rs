//! vhost 页面状态

use queue_lens_broker::Vhost;

/// vhost 页面状态
#[derive(Debug, Default)]
pub struct VhostsState {
    /// vhost 列表
    pub vhosts: Vec<Vhost>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 取数序列号（用于丢弃过期响应）
    fetch_seq: u64,
}

impl VhostsState {
    /// 创建新的 vhost 状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.vhosts.is_empty() && self.selected < self.vhosts.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.vhosts.is_empty() {
            self.selected = self.vhosts.len() - 1;
        }
    }

    /// 获取当前选中的 vhost
    pub fn selected_vhost(&self) -> Option<&Vhost> {
        self.vhosts.get(self.selected)
    }

    /// 发起一次新的取数，返回其序列号
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// 判断完成事件是否属于最近一次发起的取数
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.fetch_seq
    }

    /// 设置 vhost 列表
    pub fn set_vhosts(&mut self, vhosts: Vec<Vhost>) {
        self.vhosts = vhosts;
        self.selected = 0;
        self.loading = false;
        self.error = None;
    }

    /// 取数失败，退化为空态
    pub fn fail(&mut self, error: String) {
        self.vhosts.clear();
        self.selected = 0;
        self.loading = false;
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vhost(name: &str) -> Vhost {
        Vhost {
            name: name.to_string(),
        }
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = VhostsState::new();
        state.set_vhosts(vec![vhost("/"), vhost("dev")]);

        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_last();
        assert_eq!(state.selected, 1);
        state.select_first();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn begin_fetch_issues_increasing_seq() {
        let mut state = VhostsState::new();
        let a = state.begin_fetch();
        let b = state.begin_fetch();
        assert!(b > a);
        assert!(!state.is_current(a));
        assert!(state.is_current(b));
    }

    #[test]
    fn fail_degrades_to_empty_state() {
        let mut state = VhostsState::new();
        state.set_vhosts(vec![vhost("/")]);
        state.fail("boom".to_string());
        assert!(state.vhosts.is_empty());
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading);
    }
}

//! 定长分页
//!
//! 页码从 1 开始，翻页越界时保持原页不动。

use serde::Serialize;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 分页游标
#[derive(Debug, Clone)]
pub struct Paginator {
    current_page: usize,
    items_per_page: usize,
}

impl Paginator {
    /// items_per_page 为 0 时按默认页大小处理
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: if items_per_page == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                items_per_page
            },
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// 总页数 = ceil(len / 每页条数)，空集合为 0 页
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page)
    }

    /// 翻到指定页；页码在 [1, total_pages] 之外时不做任何事
    pub fn go_to_page(&mut self, page: usize, total_items: usize) {
        if page >= 1 && page <= self.total_pages(total_items) {
            self.current_page = page;
        }
    }

    /// 当前页的数据切片，长度不会超过每页条数
    pub fn page_slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= data.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(data.len());
        &data[start..end]
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// 分页结果载荷
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

/// 一次性分页：请求页码无效时落在第 1 页
pub fn paginate<T: Clone>(data: &[T], page: usize, items_per_page: usize) -> Page<T> {
    let mut paginator = Paginator::new(items_per_page);
    paginator.go_to_page(page, data.len());

    Page {
        items: paginator.page_slice(data).to_vec(),
        total_items: data.len(),
        current_page: paginator.current_page(),
        total_pages: paginator.total_pages(data.len()),
    }
}

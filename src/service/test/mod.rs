mod member;
